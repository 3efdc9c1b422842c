// Input handling system
//
// Keyboard events arrive between ticks and are collected per player. Each tick
// reads the held keys and the presses since the previous tick, then calls
// `InputManager::update()` to drop those edges.
//
// - `action`: game actions and the two default binding tables
// - `config`: per-player key → action lookup
// - `player`: per-player held/pressed state
// - `manager`: routes winit key events to players

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{Action, InputSource};
pub use manager::{InputManager, PLAYER_COUNT};
pub use player::PlayerInput;
