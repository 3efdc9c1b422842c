// Arcade world rules for gravity and the floor line

use glam::Vec2;

/// Arcade world rules shared by every fighter.
///
/// Units are canvas pixels and ticks; there is no timestep scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    /// Downward acceleration added to vertical velocity every airborne tick
    pub gravity: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,
    /// Distance between the canvas bottom and the floor line
    pub floor_margin: f32,
    /// Y coordinate a grounded body snaps to
    pub ground_level: f32,
}

/// Canvas size used by the arena
pub const CANVAS_WIDTH: f32 = 1024.0;
pub const CANVAS_HEIGHT: f32 = 576.0;

/// The arena rules
pub const ARENA: World = World {
    gravity: 0.8,
    canvas_height: CANVAS_HEIGHT,
    floor_margin: 151.0,
    // Not floor_y - body_height: bodies rest slightly into the floor line
    ground_level: 330.0,
};

impl Default for World {
    fn default() -> Self {
        ARENA
    }
}

impl World {
    /// Y coordinate of the floor line
    pub fn floor_y(&self) -> f32 {
        self.canvas_height - self.floor_margin
    }

    /// Integrate one tick of motion for a body of the given height.
    ///
    /// Position moves by the current velocity first; the ground test then looks
    /// one step ahead using the *pre-gravity* vertical velocity.
    /// Returns true if the body is resting on the ground after the step.
    pub fn integrate(&self, position: &mut Vec2, velocity: &mut Vec2, body_height: f32) -> bool {
        *position += *velocity;

        if position.y + body_height + velocity.y >= self.floor_y() {
            velocity.y = 0.0;
            position.y = self.ground_level;
            true
        } else {
            velocity.y += self.gravity;
            false
        }
    }
}
