// Arcade physics: hand-tuned gravity/ground rule and AABB overlap tests

mod collision;
mod world;

pub use collision::overlaps;
pub use world::{World, ARENA, CANVAS_HEIGHT, CANVAS_WIDTH};
