// Game layer: fighters and the match rules built on the engine

pub mod characters;
pub mod duel;
