// Engine modules: timing, assets, input, physics, renderer

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
