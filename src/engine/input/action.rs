// Game action definitions and default bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions for one fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack1,
    Attack2,
}

impl Action {
    /// Whether this action is a horizontal movement key
    pub fn is_move(&self) -> bool {
        matches!(self, Self::MoveLeft | Self::MoveRight)
    }
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default bindings for Player 1 (left side)
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyQ), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::KeyG), Action::Attack1),
        (InputSource::key(KeyCode::KeyH), Action::Attack2),
    ]
}

/// Default bindings for Player 2 (right side)
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::Numpad0), Action::Jump),
        (InputSource::key(KeyCode::Enter), Action::Attack1),
        (InputSource::key(KeyCode::NumpadEnter), Action::Attack1),
        (InputSource::key(KeyCode::Numpad3), Action::Attack2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_move_actions() {
        assert!(Action::MoveLeft.is_move());
        assert!(Action::MoveRight.is_move());
        assert!(!Action::Jump.is_move());
        assert!(!Action::Attack2.is_move());
    }

    #[test]
    fn test_every_action_bound_for_both_players() {
        let all = [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Attack1,
            Action::Attack2,
        ];
        for bindings in [default_p1_bindings(), default_p2_bindings()] {
            for action in all {
                assert!(
                    bindings.iter().any(|(_, a)| *a == action),
                    "{action:?} has no binding"
                );
            }
        }
    }

    #[test]
    fn test_players_share_no_keys() {
        let p1: HashSet<_> = default_p1_bindings().into_iter().map(|(s, _)| s).collect();
        let p2: HashSet<_> = default_p2_bindings().into_iter().map(|(s, _)| s).collect();
        assert!(p1.is_disjoint(&p2));
    }
}
