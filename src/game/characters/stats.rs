// Fighter stats and per-fighter profiles
// Both fighters share the same base stats; they differ in art, reach and timing

use super::animation::{AnimationClip, ClipError, ClipSet};
use super::state::ClipKind;
use crate::engine::assets::TextureHandle;
use glam::Vec2;

/// Shared fighter stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterStats {
    // Body (collision box, independent of the drawn sprite)
    /// Body width in canvas pixels
    pub body_width: f32,
    /// Body height in canvas pixels
    pub body_height: f32,

    // Combat
    /// Starting health
    pub max_health: i32,
    /// Health lost on every landed hit
    pub hit_damage: i32,

    // Movement
    /// Horizontal speed while a direction key is held (pixels/tick)
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,
}

/// The stats used by both fighters
pub const BASE_STATS: FighterStats = FighterStats {
    body_width: 45.0,
    body_height: 100.0,

    max_health: 100,
    hit_damage: 3,

    move_speed: 4.0,
    jump_velocity: -15.0,
};

impl Default for FighterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl FighterStats {
    /// Body size as a vector
    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }
}

/// Damage-dealing rectangle relative to the fighter position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackBox {
    pub offset: Vec2,
    pub width: f32,
    pub height: f32,
}

impl AttackBox {
    pub const fn new(offset: Vec2, width: f32, height: f32) -> Self {
        Self {
            offset,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Where one clip's frames come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipSource {
    pub kind: ClipKind,
    /// Image path relative to the asset directory
    pub path: &'static str,
    pub frame_count: usize,
}

impl ClipSource {
    pub const fn new(kind: ClipKind, path: &'static str, frame_count: usize) -> Self {
        Self {
            kind,
            path,
            frame_count,
        }
    }
}

/// Everything that distinguishes one fighter from the other
#[derive(Debug, Clone, Copy)]
pub struct FighterProfile {
    /// Display name for logs
    pub name: &'static str,
    /// Starting position
    pub spawn: Vec2,
    /// Sprite draw scale
    pub scale: f32,
    /// Subtracted from the position to place the sprite
    pub draw_offset: Vec2,
    pub attack_box: AttackBox,
    /// Frame index of an attack clip at which damage is evaluated
    pub impact_frame: usize,
    pub clips: &'static [ClipSource],
}

/// Left fighter
pub const PLAYER_ONE: FighterProfile = FighterProfile {
    name: "Player 1",
    spawn: Vec2::new(0.0, 0.0),
    scale: 3.0,
    draw_offset: Vec2::new(210.0, 200.0),
    attack_box: AttackBox::new(Vec2::new(50.0, -40.0), 190.0, 80.0),
    impact_frame: 4,
    clips: &[
        ClipSource::new(ClipKind::Idle, "Idle.png", 11),
        ClipSource::new(ClipKind::Run, "Run.png", 8),
        ClipSource::new(ClipKind::Jump, "Jump.png", 3),
        ClipSource::new(ClipKind::Fall, "Fall.png", 3),
        ClipSource::new(ClipKind::Attack1, "Attack1.png", 7),
        ClipSource::new(ClipKind::Attack2, "Attack2.png", 7),
        ClipSource::new(ClipKind::TakeHit, "Take Hit.png", 4),
        ClipSource::new(ClipKind::Death, "Death.png", 11),
    ],
};

/// Right fighter; its hitbox reaches to the left
pub const PLAYER_TWO: FighterProfile = FighterProfile {
    name: "Player 2",
    spawn: Vec2::new(950.0, 0.0),
    scale: 3.0,
    draw_offset: Vec2::new(210.0, 180.0),
    attack_box: AttackBox::new(Vec2::new(-200.0, -40.0), 300.0, 80.0),
    impact_frame: 3,
    clips: &[
        ClipSource::new(ClipKind::Idle, "Idle2.png", 8),
        ClipSource::new(ClipKind::Run, "Run2.png", 8),
        ClipSource::new(ClipKind::Jump, "Jump2.png", 2),
        ClipSource::new(ClipKind::Fall, "Fall2.png", 2),
        ClipSource::new(ClipKind::Attack1, "Attack_2.png", 4),
        ClipSource::new(ClipKind::Attack2, "Attack_3.png", 4),
        ClipSource::new(ClipKind::TakeHit, "hit2.png", 4),
        ClipSource::new(ClipKind::Death, "Death2.png", 6),
    ],
};

/// Static arena backdrop
pub const BACKGROUND: ClipSource = ClipSource::new(ClipKind::Idle, "bg2.jpg", 1);

impl FighterProfile {
    /// Build the clip table, asking `load` for each image's handle and pixel
    /// size. A zero size marks an image that could not be loaded.
    pub fn clip_set<F>(&self, mut load: F) -> Result<ClipSet, ClipError>
    where
        F: FnMut(&str) -> (TextureHandle, Vec2),
    {
        ClipSet::from_entries(self.clips.iter().map(|source| {
            let (image, size) = load(source.path);
            (source.kind, AnimationClip::new(image, source.frame_count, size))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_loader(path: &str) -> (TextureHandle, Vec2) {
        (TextureHandle::for_path(path), Vec2::new(1600.0, 200.0))
    }

    #[test]
    fn test_default_stats() {
        let stats = FighterStats::default();
        assert_eq!(stats.max_health, 100);
        assert_eq!(stats.hit_damage, 3);
        assert_eq!(stats.move_speed, 4.0);
        assert_eq!(stats.body_size(), Vec2::new(45.0, 100.0));
    }

    #[test]
    fn test_profiles_build_complete_clip_sets() {
        for profile in [PLAYER_ONE, PLAYER_TWO] {
            let clips = profile.clip_set(stub_loader).unwrap();
            for kind in ClipKind::ALL {
                assert!(clips.get(kind).frame_count >= 1);
            }
        }
    }

    #[test]
    fn test_clip_paths_and_frames() {
        let one = PLAYER_ONE.clip_set(stub_loader).unwrap();
        assert_eq!(one.get(ClipKind::Attack1).frame_count, 7);
        assert_eq!(
            one.get(ClipKind::TakeHit).image,
            TextureHandle::for_path("Take Hit.png")
        );

        let two = PLAYER_TWO.clip_set(stub_loader).unwrap();
        assert_eq!(two.get(ClipKind::Attack1).frame_count, 4);
        assert_eq!(two.get(ClipKind::Death).frame_count, 6);
    }

    #[test]
    fn test_impact_frames_fit_attack_clips() {
        for profile in [PLAYER_ONE, PLAYER_TWO] {
            let clips = profile.clip_set(stub_loader).unwrap();
            assert!(profile.impact_frame < clips.get(ClipKind::Attack1).frame_count);
            assert!(profile.impact_frame < clips.get(ClipKind::Attack2).frame_count);
        }
    }

    #[test]
    fn test_loader_failure_keeps_zero_size() {
        let clips = PLAYER_ONE
            .clip_set(|path| (TextureHandle::for_path(path), Vec2::ZERO))
            .unwrap();
        assert!(!clips.get(ClipKind::Idle).is_loaded());
    }
}
