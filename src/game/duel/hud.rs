// Heads-up display: health bars, hit flash, timer and banner

use super::resolver::MatchOutcome;
use crate::core::math::{clamp, Rect};
use crate::engine::physics::CANVAS_WIDTH;
use crate::engine::renderer::{Sprite, SpriteBatch};
use glam::Vec4;

/// Ticks a health bar stays white after a hit (~150 ms at 60 Hz)
pub const FLASH_TICKS: u32 = 9;

const BAR_TOP: f32 = 20.0;
const BAR_HEIGHT: f32 = 30.0;
const BAR_MARGIN: f32 = 20.0;
/// Gap left between the bars for the timer
const TIMER_GAP: f32 = 100.0;

const BAR_BACK: Vec4 = Vec4::new(0.94, 0.27, 0.27, 1.0);
const BAR_FILL: Vec4 = Vec4::new(0.51, 0.55, 0.97, 1.0);
const BAR_FLASH: Vec4 = Vec4::ONE;

/// Everything the HUD shows
#[derive(Debug, Clone)]
pub struct HudState {
    /// Seconds left on the clock
    pub timer: u32,
    /// Health of each fighter
    pub health: [i32; 2],
    max_health: i32,
    /// Remaining flash ticks per bar
    flash: [u32; 2],
    /// Winner text once the match is over
    pub banner: Option<MatchOutcome>,
}

impl HudState {
    pub fn new(timer: u32, max_health: i32) -> Self {
        Self {
            timer,
            health: [max_health; 2],
            max_health: max_health.max(1),
            flash: [0; 2],
            banner: None,
        }
    }

    /// Start the hit flash on one fighter's bar
    pub fn flash(&mut self, fighter: usize) {
        if let Some(ticks) = self.flash.get_mut(fighter) {
            *ticks = FLASH_TICKS;
        }
    }

    pub fn is_flashing(&self, fighter: usize) -> bool {
        self.flash.get(fighter).is_some_and(|&ticks| ticks > 0)
    }

    /// Count down running flashes by one tick
    pub fn tick(&mut self) {
        for ticks in &mut self.flash {
            *ticks = ticks.saturating_sub(1);
        }
    }

    /// Filled share of a bar, 0.0 to 1.0
    pub fn fill_ratio(&self, fighter: usize) -> f32 {
        let health = self.health.get(fighter).copied().unwrap_or(0);
        clamp(health, 0, self.max_health) as f32 / self.max_health as f32
    }

    /// Queue both health bars. Each bar drains toward the timer.
    pub fn render(&self, batch: &mut SpriteBatch) {
        let bar_width = (CANVAS_WIDTH - TIMER_GAP) / 2.0 - BAR_MARGIN;

        for fighter in 0..2 {
            let left = if fighter == 0 {
                BAR_MARGIN
            } else {
                (CANVAS_WIDTH + TIMER_GAP) / 2.0
            };
            batch.push(Sprite::solid(
                Rect::new(left, BAR_TOP, bar_width, BAR_HEIGHT),
                BAR_BACK,
            ));

            let fill_width = bar_width * self.fill_ratio(fighter);
            if fill_width <= 0.0 {
                continue;
            }
            let fill_left = if fighter == 0 {
                left + bar_width - fill_width
            } else {
                left
            };
            let color = if self.is_flashing(fighter) {
                BAR_FLASH
            } else {
                BAR_FILL
            };
            batch.push(Sprite::solid(
                Rect::new(fill_left, BAR_TOP, fill_width, BAR_HEIGHT),
                color,
            ));
        }
    }

    /// Window title line: clock, health and banner
    pub fn title(&self) -> String {
        let mut title = format!(
            "Duel Arena | {} | P1 {} - P2 {}",
            self.timer,
            self.health[0].max(0),
            self.health[1].max(0)
        );
        if let Some(outcome) = self.banner {
            title.push_str(" | ");
            title.push_str(outcome.banner());
        }
        title
    }
}
