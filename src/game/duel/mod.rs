// One match between two local players
//
// - `Duel` runs the per-tick loop: input, movement, animation, hits, match end
// - Combat resolves hits; the resolver and countdown decide when and how it ends
// - The HUD mirrors health, time and result

pub mod combat;
pub mod controls;
pub mod countdown;
pub mod hud;
pub mod resolver;

pub use controls::Controls;
pub use countdown::{Countdown, CountdownTick, MATCH_SECONDS};
pub use hud::HudState;
pub use resolver::{resolve, MatchOutcome};

use crate::engine::assets::TextureHandle;
use crate::engine::physics::World;
use crate::engine::renderer::SpriteBatch;
use crate::game::characters::{
    AnimatedSprite, AnimationClip, ClipError, Fighter, FighterStats, BACKGROUND, PLAYER_ONE,
    PLAYER_TWO,
};
use glam::Vec2;
use log::{debug, info};

/// A running match: both fighters, the backdrop, the clock and the result
pub struct Duel {
    world: World,
    fighters: [Fighter; 2],
    background: AnimatedSprite,
    countdown: Countdown,
    hud: HudState,
    outcome: Option<MatchOutcome>,
}

impl Duel {
    pub fn new(world: World, fighters: [Fighter; 2], background: AnimatedSprite) -> Self {
        info!(
            "Match start: {} vs {} ({} seconds)",
            fighters[0].name(),
            fighters[1].name(),
            MATCH_SECONDS
        );

        let hud = HudState::new(MATCH_SECONDS, fighters[0].max_health());
        Self {
            world,
            fighters,
            background,
            countdown: Countdown::new(MATCH_SECONDS),
            hud,
            outcome: None,
        }
    }

    /// Set up the standard match, asking `load` for each image's handle and size
    pub fn load<F>(world: World, stats: FighterStats, mut load: F) -> Result<Self, ClipError>
    where
        F: FnMut(&str) -> (TextureHandle, Vec2),
    {
        let one = Fighter::spawn(&PLAYER_ONE, stats, &mut load)?;
        let two = Fighter::spawn(&PLAYER_TWO, stats, &mut load)?;

        let (image, size) = load(BACKGROUND.path);
        let background = AnimatedSprite::new(
            Vec2::ZERO,
            AnimationClip::new(image, BACKGROUND.frame_count, size),
            1.0,
            Vec2::ZERO,
        );

        Ok(Self::new(world, [one, two], background))
    }

    /// Advance the match by one tick and refill `batch` with the frame to draw
    pub fn tick(&mut self, controls: &[Controls; 2], batch: &mut SpriteBatch) {
        let live = self.outcome.is_none();
        self.hud.tick();

        for (fighter, controls) in self.fighters.iter_mut().zip(controls) {
            if live {
                apply_controls(fighter, controls);
                fighter.steer(controls.left_held, controls.right_held);
            } else {
                fighter.velocity.x = 0.0;
            }
        }

        for fighter in &mut self.fighters {
            fighter.follow_motion();
        }

        batch.clear();
        self.background.update(batch);
        for fighter in &mut self.fighters {
            fighter.update(batch, &self.world);
        }

        if live {
            for strike in combat::exchange(&mut self.fighters) {
                let defender = &self.fighters[strike.defender];
                debug!(
                    "{} lands {:?} on {} ({} hp left)",
                    self.fighters[strike.attacker].name(),
                    strike.slot,
                    defender.name(),
                    defender.health()
                );
                self.hud.flash(strike.defender);
            }
            for fighter in &mut self.fighters {
                combat::expire_attacks(fighter);
            }

            if self.fighters.iter().any(|f| f.health() <= 0) {
                self.finish();
            }
        }

        self.hud.health = [self.fighters[0].health(), self.fighters[1].health()];
        self.hud.render(batch);
    }

    /// Advance the match clock by one second
    pub fn tick_second(&mut self) {
        match self.countdown.tick() {
            CountdownTick::Running(remaining) => self.hud.timer = remaining,
            CountdownTick::Expired => {
                self.hud.timer = 0;
                info!("Time up");
                self.finish();
            }
            CountdownTick::Idle => {}
        }
    }

    /// Stop the clock and latch the result. Later calls do nothing.
    pub fn finish(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.countdown.stop();

        let outcome = resolve(self.fighters[0].health(), self.fighters[1].health());
        info!(
            "{} ({} - {})",
            outcome,
            self.fighters[0].health(),
            self.fighters[1].health()
        );
        self.outcome = Some(outcome);
        self.hud.banner = Some(outcome);
    }

    #[allow(dead_code)]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    #[allow(dead_code)]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[allow(dead_code)]
    pub fn fighter(&self, index: usize) -> Option<&Fighter> {
        self.fighters.get(index)
    }

    #[allow(dead_code)]
    pub fn fighter_mut(&mut self, index: usize) -> Option<&mut Fighter> {
        self.fighters.get_mut(index)
    }

    #[allow(dead_code)]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[allow(dead_code)]
    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    /// Window title for the current state
    pub fn title(&self) -> String {
        self.hud.title()
    }
}

/// Apply one tick of presses. Dead fighters ignore them.
fn apply_controls(fighter: &mut Fighter, controls: &Controls) {
    if fighter.is_dead() {
        return;
    }

    if let Some(direction) = controls.direction_pressed {
        fighter.last_direction = Some(direction);
    }
    if controls.jump {
        fighter.jump();
    }
    if controls.attack1 {
        fighter.attack();
    }
    if controls.attack2 {
        fighter.attack2();
    }
}
