// Input manager - routes key events to the players' input state

use super::action::InputSource;
use super::config::InputConfigManager;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Number of local players
pub const PLAYER_COUNT: usize = 2;

/// Collects key events between ticks for every player
pub struct InputManager {
    config: InputConfigManager,
    players: Vec<PlayerInput>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new(max_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(max_players),
            players: (0..max_players).map(|_| PlayerInput::new()).collect(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical keys are bound
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(
                InputSource::key(key_code),
                event.state == ElementState::Pressed,
                event.repeat,
            );
        }
    }

    /// Route one key transition to every player bound to it
    pub fn process_key(&mut self, source: InputSource, pressed: bool, repeat: bool) {
        for (player_id, player) in self.players.iter_mut().enumerate() {
            let Some(action) = self.config.get_action(player_id, source) else {
                continue;
            };

            if pressed {
                // OS key repeat re-triggers the action, no debouncing
                if repeat {
                    player.repeat(action);
                } else {
                    player.press(action);
                }
            } else {
                player.release(action);
            }
        }
    }

    /// Clear per-tick edges; call after each tick that read the input
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Reset all player input states (e.g. when the window loses focus)
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(PLAYER_COUNT)
    }
}
