// Fighter entity: an animated sprite with movement, health and attacks

use super::animation::{AnimatedSprite, ClipError, ClipSet};
use super::state::{ClipKind, Direction};
use super::stats::{AttackBox, FighterProfile, FighterStats};
use crate::core::math::Rect;
use crate::engine::assets::TextureHandle;
use crate::engine::physics::World;
use crate::engine::renderer::SpriteBatch;
use glam::Vec2;
use log::{info, trace};

/// One of the two attacks a fighter can throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackSlot {
    First,
    Second,
}

impl AttackSlot {
    pub const ALL: [AttackSlot; 2] = [AttackSlot::First, AttackSlot::Second];

    /// Clip played while this attack is thrown
    pub fn clip(self) -> ClipKind {
        match self {
            Self::First => ClipKind::Attack1,
            Self::Second => ClipKind::Attack2,
        }
    }
}

/// A playable fighter
#[derive(Debug, Clone)]
pub struct Fighter {
    name: &'static str,
    stats: FighterStats,

    // Presentation
    sprite: AnimatedSprite,
    clips: ClipSet,
    current_kind: ClipKind,

    // Motion
    /// Pixels per tick; y grows downward
    pub velocity: Vec2,
    /// Direction of the most recent movement key press
    pub last_direction: Option<Direction>,

    // Combat
    health: i32,
    is_attacking: bool,
    is_attacking2: bool,
    dead: bool,
    attack_box: AttackBox,
    /// Absolute hitbox origin, refreshed every update
    attack_position: Vec2,
    impact_frame: usize,
}

impl Fighter {
    /// Create a fighter at full health, standing still on its idle clip
    pub fn new(profile: &FighterProfile, stats: FighterStats, clips: ClipSet) -> Self {
        let sprite = AnimatedSprite::new(
            profile.spawn,
            *clips.get(ClipKind::Idle),
            profile.scale,
            profile.draw_offset,
        );

        Self {
            name: profile.name,
            stats,
            sprite,
            clips,
            current_kind: ClipKind::Idle,
            velocity: Vec2::ZERO,
            last_direction: None,
            health: stats.max_health,
            is_attacking: false,
            is_attacking2: false,
            dead: false,
            attack_box: profile.attack_box,
            attack_position: profile.spawn + profile.attack_box.offset,
            impact_frame: profile.impact_frame,
        }
    }

    /// Build a fighter from its profile, loading each clip image through `load`
    pub fn spawn<F>(
        profile: &FighterProfile,
        stats: FighterStats,
        load: F,
    ) -> Result<Self, ClipError>
    where
        F: FnMut(&str) -> (TextureHandle, Vec2),
    {
        let clips = profile.clip_set(load)?;
        Ok(Self::new(profile, stats, clips))
    }

    /// Per-tick update: draw, animate, move the hitbox, then integrate motion
    pub fn update(&mut self, batch: &mut SpriteBatch, world: &World) {
        self.sprite.render(batch);

        if !self.dead {
            self.sprite.advance();
        }

        // Sampled before integration, so the hitbox trails the body by a tick
        self.attack_position = self.sprite.position + self.attack_box.offset;

        world.integrate(
            &mut self.sprite.position,
            &mut self.velocity,
            self.stats.body_height,
        );
    }

    /// Request a clip change.
    ///
    /// Attack and hit clips finish before anything else may play. Death is
    /// final: once its last frame shows, the next request marks the fighter
    /// dead and every request is ignored.
    pub fn switch_clip(&mut self, kind: ClipKind) {
        if self.current_kind == ClipKind::Death {
            if self.sprite.is_on_last_frame() && !self.dead {
                info!("{} is down", self.name);
                self.dead = true;
            }
            return;
        }

        if self.current_kind.plays_to_end() && !self.sprite.is_on_last_frame() {
            return;
        }

        if kind != self.current_kind {
            trace!("{}: {} -> {}", self.name, self.current_kind.name(), kind.name());
            self.current_kind = kind;
            self.sprite.set_clip(*self.clips.get(kind));
        }
    }

    /// Throw the first attack. The flag is raised even if the clip is busy.
    pub fn attack(&mut self) {
        self.switch_clip(ClipKind::Attack1);
        self.is_attacking = true;
    }

    /// Throw the second attack. The flag is raised even if the clip is busy.
    pub fn attack2(&mut self) {
        self.switch_clip(ClipKind::Attack2);
        self.is_attacking2 = true;
    }

    /// Take a landed hit
    pub fn take_hit(&mut self) {
        self.health -= self.stats.hit_damage;

        if self.health <= 0 {
            self.switch_clip(ClipKind::Death);
        } else {
            self.switch_clip(ClipKind::TakeHit);
        }
    }

    /// Lose health without any clip change
    pub fn lose_health(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Launch upward. There is no ground check.
    pub fn jump(&mut self) {
        self.velocity.y = self.stats.jump_velocity;
    }

    /// Set horizontal velocity from held keys; only the most recently pressed
    /// direction moves the fighter.
    pub fn steer(&mut self, left_held: bool, right_held: bool) {
        self.velocity.x = match self.last_direction {
            Some(Direction::Left) if left_held => -self.stats.move_speed,
            Some(Direction::Right) if right_held => self.stats.move_speed,
            _ => 0.0,
        };
    }

    /// Request the clip matching the current motion
    pub fn follow_motion(&mut self) {
        self.switch_clip(ClipKind::for_motion(self.velocity));
    }

    pub fn is_attacking(&self, slot: AttackSlot) -> bool {
        match slot {
            AttackSlot::First => self.is_attacking,
            AttackSlot::Second => self.is_attacking2,
        }
    }

    pub fn clear_attack(&mut self, slot: AttackSlot) {
        match slot {
            AttackSlot::First => self.is_attacking = false,
            AttackSlot::Second => self.is_attacking2 = false,
        }
    }

    /// Whether the current frame is the one attacks land on
    pub fn at_impact_frame(&self) -> bool {
        self.sprite.current_frame() == self.impact_frame
    }

    /// Whether `kind` is playing and showing its final frame
    pub fn is_finishing(&self, kind: ClipKind) -> bool {
        self.current_kind == kind && self.sprite.is_on_last_frame()
    }

    /// Absolute hitbox rectangle as of the last update
    pub fn attack_rect(&self) -> Rect {
        Rect::from_min_size(self.attack_position, self.attack_box.size())
    }

    /// Body rectangle at the current position
    pub fn body_rect(&self) -> Rect {
        Rect::from_min_size(self.sprite.position, self.stats.body_size())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    #[allow(dead_code)]
    pub fn current_kind(&self) -> ClipKind {
        self.current_kind
    }

    #[allow(dead_code)]
    pub fn current_frame(&self) -> usize {
        self.sprite.current_frame()
    }

    #[allow(dead_code)]
    pub fn position(&self) -> Vec2 {
        self.sprite.position
    }

    #[allow(dead_code)]
    pub fn set_position(&mut self, position: Vec2) {
        self.sprite.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::ARENA;
    use crate::game::characters::stats::{BASE_STATS, PLAYER_ONE, PLAYER_TWO};
    use approx::assert_relative_eq;

    fn fighter(profile: &FighterProfile) -> Fighter {
        Fighter::spawn(profile, BASE_STATS, |path| {
            (TextureHandle::for_path(path), Vec2::new(1600.0, 200.0))
        })
        .unwrap()
    }

    /// Run updates until the current clip shows its last frame
    fn play_to_last_frame(f: &mut Fighter) {
        let mut batch = SpriteBatch::new();
        for _ in 0..200 {
            if f.sprite.is_on_last_frame() {
                return;
            }
            f.update(&mut batch, &ARENA);
        }
        panic!("clip never reached its last frame");
    }

    fn step(f: &mut Fighter, ticks: usize) {
        let mut batch = SpriteBatch::new();
        for _ in 0..ticks {
            f.update(&mut batch, &ARENA);
        }
    }

    #[test]
    fn test_spawns_idle_at_full_health() {
        let f = fighter(&PLAYER_TWO);
        assert_eq!(f.health(), 100);
        assert_eq!(f.current_kind(), ClipKind::Idle);
        assert_eq!(f.position(), Vec2::new(950.0, 0.0));
        assert_eq!(f.velocity, Vec2::ZERO);
        assert!(!f.is_dead());
    }

    #[test]
    fn test_falls_to_ground_level() {
        let mut f = fighter(&PLAYER_ONE);
        step(&mut f, 200);
        assert_relative_eq!(f.position().y, 330.0);
        assert_eq!(f.velocity.y, 0.0);
    }

    #[test]
    fn test_update_draws_one_quad() {
        let mut f = fighter(&PLAYER_ONE);
        let mut batch = SpriteBatch::new();
        f.update(&mut batch, &ARENA);
        assert_eq!(batch.len(), 1);
        // 11 idle frames of a 1600 px strip at scale 3
        assert_relative_eq!(batch.sprites()[0].dest.width(), 1600.0 / 11.0 * 3.0, epsilon = 1e-3);
    }

    #[test]
    fn test_hitbox_trails_position_by_one_tick() {
        let mut f = fighter(&PLAYER_ONE);
        f.set_position(Vec2::new(100.0, 330.0));
        f.velocity.x = 4.0;
        step(&mut f, 1);

        assert_eq!(f.position().x, 104.0);
        assert_eq!(f.attack_rect(), Rect::new(150.0, 290.0, 190.0, 80.0));
        assert_eq!(f.body_rect(), Rect::new(104.0, 330.0, 45.0, 100.0));
    }

    #[test]
    fn test_attack_is_uninterruptible() {
        let mut f = fighter(&PLAYER_ONE);
        f.attack();
        assert_eq!(f.current_kind(), ClipKind::Attack1);
        assert!(f.is_attacking(AttackSlot::First));

        f.switch_clip(ClipKind::Run);
        assert_eq!(f.current_kind(), ClipKind::Attack1);

        play_to_last_frame(&mut f);
        f.switch_clip(ClipKind::Run);
        assert_eq!(f.current_kind(), ClipKind::Run);
        assert_eq!(f.current_frame(), 0);
    }

    #[test]
    fn test_attack_flag_set_even_when_blocked() {
        let mut f = fighter(&PLAYER_ONE);
        f.attack();
        f.attack2();
        assert_eq!(f.current_kind(), ClipKind::Attack1);
        assert!(f.is_attacking(AttackSlot::First));
        assert!(f.is_attacking(AttackSlot::Second));

        f.clear_attack(AttackSlot::Second);
        assert!(!f.is_attacking(AttackSlot::Second));
        assert!(f.is_attacking(AttackSlot::First));
    }

    #[test]
    fn test_take_hit_is_uninterruptible() {
        let mut f = fighter(&PLAYER_TWO);
        f.take_hit();
        assert_eq!(f.health(), 97);
        assert_eq!(f.current_kind(), ClipKind::TakeHit);

        f.attack();
        assert_eq!(f.current_kind(), ClipKind::TakeHit);

        play_to_last_frame(&mut f);
        f.switch_clip(ClipKind::Idle);
        assert_eq!(f.current_kind(), ClipKind::Idle);
    }

    #[test]
    fn test_same_clip_request_keeps_frame() {
        let mut f = fighter(&PLAYER_ONE);
        step(&mut f, 10);
        let frame = f.current_frame();
        assert!(frame > 0);
        f.switch_clip(ClipKind::Idle);
        assert_eq!(f.current_frame(), frame);
    }

    #[test]
    fn test_death_is_terminal() {
        let mut f = fighter(&PLAYER_TWO);
        f.lose_health(97);
        f.take_hit();
        assert_eq!(f.health(), 0);
        assert_eq!(f.current_kind(), ClipKind::Death);

        f.switch_clip(ClipKind::Idle);
        assert_eq!(f.current_kind(), ClipKind::Death);
        assert!(!f.is_dead());

        play_to_last_frame(&mut f);
        f.switch_clip(ClipKind::Run);
        assert!(f.is_dead());
        assert_eq!(f.current_kind(), ClipKind::Death);

        // Frozen on the last frame
        let frame = f.current_frame();
        step(&mut f, 30);
        assert_eq!(f.current_frame(), frame);
    }

    #[test]
    fn test_steer_follows_last_direction() {
        let mut f = fighter(&PLAYER_ONE);
        f.steer(true, false);
        assert_eq!(f.velocity.x, 0.0);

        f.last_direction = Some(Direction::Left);
        f.steer(true, true);
        assert_eq!(f.velocity.x, -4.0);

        f.last_direction = Some(Direction::Right);
        f.steer(true, false);
        assert_eq!(f.velocity.x, 0.0);
        f.steer(false, true);
        assert_eq!(f.velocity.x, 4.0);
    }

    #[test]
    fn test_jump_then_follow_motion() {
        let mut f = fighter(&PLAYER_ONE);
        f.set_position(Vec2::new(0.0, 330.0));
        f.jump();
        assert_eq!(f.velocity.y, -15.0);
        f.follow_motion();
        assert_eq!(f.current_kind(), ClipKind::Jump);

        step(&mut f, 20);
        f.follow_motion();
        assert_eq!(f.current_kind(), ClipKind::Fall);
    }

    #[test]
    fn test_attack_slot_clips() {
        assert_eq!(AttackSlot::First.clip(), ClipKind::Attack1);
        assert_eq!(AttackSlot::Second.clip(), ClipKind::Attack2);
    }
}
