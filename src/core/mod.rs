// Shared math types used by both the engine and the game

pub mod math;
