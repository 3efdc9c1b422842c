// Per-tick control record for one fighter

use crate::engine::input::{Action, PlayerInput};
use crate::game::characters::Direction;

/// What one player asked for during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Left movement key held
    pub left_held: bool,
    /// Right movement key held
    pub right_held: bool,
    /// Most recent direction key pressed this tick
    pub direction_pressed: Option<Direction>,
    pub jump: bool,
    pub attack1: bool,
    pub attack2: bool,
}

impl Controls {
    /// No keys held or pressed
    pub fn idle() -> Self {
        Self::default()
    }

    /// Snapshot a player's input state
    pub fn from_input(input: &PlayerInput) -> Self {
        Self {
            left_held: input.is_pressed(Action::MoveLeft),
            right_held: input.is_pressed(Action::MoveRight),
            direction_pressed: input.latest_move().and_then(direction_of),
            jump: input.just_pressed(Action::Jump),
            attack1: input.just_pressed(Action::Attack1),
            attack2: input.just_pressed(Action::Attack2),
        }
    }
}

fn direction_of(action: Action) -> Option<Direction> {
    match action {
        Action::MoveLeft => Some(Direction::Left),
        Action::MoveRight => Some(Direction::Right),
        _ => None,
    }
}
