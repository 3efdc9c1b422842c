// Per-player key binding tables

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Input configuration for a single player
/// Maps input sources (keys) to game actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty input configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Default configuration for a player slot; slots past the second have none
    pub fn defaults_for(player_id: usize) -> Self {
        let bindings = match player_id {
            0 => super::action::default_p1_bindings(),
            1 => super::action::default_p2_bindings(),
            _ => Vec::new(),
        };
        Self::from_bindings(bindings)
    }

    /// Bind an input source to an action, replacing any previous binding of the source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

/// Binding tables for every player
#[derive(Debug)]
pub struct InputConfigManager {
    configs: Vec<InputConfig>,
}

impl InputConfigManager {
    /// Create default configurations for `max_players` players
    pub fn new(max_players: usize) -> Self {
        Self {
            configs: (0..max_players).map(InputConfig::defaults_for).collect(),
        }
    }

    /// Get a player's configuration
    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    /// Get the action for a given input source and player
    pub fn get_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.get_config(player_id)
            .and_then(|config| config.get_action(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);

        assert_eq!(config.get_action(source), Some(Action::MoveLeft));
    }

    #[test]
    fn test_rebinding_replaces_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveLeft);
        config.bind(source, Action::Jump);

        assert_eq!(config.get_action(source), Some(Action::Jump));
        assert_eq!(config.bindings.len(), 1);
    }

    #[test]
    fn test_two_keys_one_action() {
        let config = InputConfig::defaults_for(1);
        for key in [KeyCode::Enter, KeyCode::NumpadEnter] {
            assert_eq!(config.get_action(InputSource::key(key)), Some(Action::Attack1));
        }
    }

    #[test]
    fn test_manager_routes_keys_per_player() {
        let manager = InputConfigManager::new(2);

        let q = InputSource::key(KeyCode::KeyQ);
        assert_eq!(manager.get_action(0, q), Some(Action::MoveLeft));
        assert_eq!(manager.get_action(1, q), None);

        let left = InputSource::key(KeyCode::ArrowLeft);
        assert_eq!(manager.get_action(1, left), Some(Action::MoveLeft));
        assert_eq!(manager.get_action(0, left), None);

        assert!(manager.get_config(2).is_none());
    }

    #[test]
    fn test_unbound_key_ignored() {
        let manager = InputConfigManager::new(2);
        let f = InputSource::key(KeyCode::KeyF);
        assert_eq!(manager.get_action(0, f), None);
        assert_eq!(manager.get_action(1, f), None);
    }
}
