// Fighter system
//
// This module contains everything related to the two fighters:
// - Sprite-sheet animation and clip tables
// - The fighter entity (movement, health, attacks)
// - Clip kinds and directions
// - Shared stats and per-fighter profiles

pub mod animation;
pub mod fighter;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimatedSprite, AnimationClip, ClipError, ClipSet};
pub use fighter::{AttackSlot, Fighter};
pub use state::{ClipKind, Direction};
pub use stats::{FighterProfile, FighterStats, BACKGROUND, BASE_STATS, PLAYER_ONE, PLAYER_TWO};
