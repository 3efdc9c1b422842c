// Animation states and movement direction

use glam::Vec2;

/// Named animation clips every fighter provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipKind {
    Idle,
    Run,
    Jump,
    Fall,
    Attack1,
    Attack2,
    TakeHit,
    Death,
}

impl ClipKind {
    /// Number of clip kinds
    pub const COUNT: usize = 8;

    /// Every clip kind, in table order
    pub const ALL: [ClipKind; Self::COUNT] = [
        ClipKind::Idle,
        ClipKind::Run,
        ClipKind::Jump,
        ClipKind::Fall,
        ClipKind::Attack1,
        ClipKind::Attack2,
        ClipKind::TakeHit,
        ClipKind::Death,
    ];

    /// Position of this kind in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Clips that must finish before any other clip may start
    pub fn plays_to_end(self) -> bool {
        matches!(self, Self::Attack1 | Self::Attack2 | Self::TakeHit)
    }

    /// Clip name for logs
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::Fall => "fall",
            Self::Attack1 => "attack1",
            Self::Attack2 => "attack2",
            Self::TakeHit => "takeHit",
            Self::Death => "death",
        }
    }

    /// Movement clip implied by a velocity: rising, falling, running or idle
    pub fn for_motion(velocity: Vec2) -> Self {
        if velocity.y < 0.0 {
            Self::Jump
        } else if velocity.y > 0.0 {
            Self::Fall
        } else if velocity.x != 0.0 {
            Self::Run
        } else {
            Self::Idle
        }
    }
}

/// Horizontal direction of a movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}
