// Per-player input state management

use super::action::Action;
use std::collections::HashSet;

/// Input state for a single player between two ticks
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions pressed since the last tick
    just_pressed: HashSet<Action>,

    /// Most recent movement press since the last tick
    latest_move: Option<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            latest_move: None,
        }
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// The movement action pressed last since the previous tick, if any
    pub fn latest_move(&self) -> Option<Action> {
        self.latest_move
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action);
            self.pressed.insert(action);
            if action.is_move() {
                self.latest_move = Some(action);
            }
        }
    }

    /// Register an OS key repeat for an action that is already held
    pub(crate) fn repeat(&mut self, action: Action) {
        self.pressed.insert(action);
        self.just_pressed.insert(action);
        if action.is_move() {
            self.latest_move = Some(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Drop per-tick edges once a tick has consumed them
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.latest_move = None;
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.update();
    }
}
