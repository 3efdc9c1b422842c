// Fixed canvas camera

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec4};

/// Maps a fixed-size canvas (origin top-left, y down) onto the whole surface.
///
/// The canvas keeps its logical size when the window is resized; it is
/// stretched to fit.
#[derive(Debug, Clone)]
pub struct CanvasCamera {
    width: f32,
    height: f32,
    view_proj: Mat4,
}

impl CanvasCamera {
    pub fn new(width: f32, height: f32) -> Self {
        let view_proj = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self {
            width,
            height,
            view_proj,
        }
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Logical canvas size
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Convert a canvas point to normalized device coordinates
    #[allow(dead_code)]
    pub fn canvas_to_ndc(&self, point: Vec2) -> Vec2 {
        let clip = self.view_proj * Vec4::new(point.x, point.y, 0.0, 1.0);
        Vec2::new(clip.x / clip.w, clip.y / clip.w)
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &CanvasCamera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_canvas_corners() {
        let camera = CanvasCamera::new(1024.0, 576.0);

        let top_left = camera.canvas_to_ndc(Vec2::ZERO);
        assert_relative_eq!(top_left.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(top_left.y, 1.0, epsilon = 1e-5);

        let bottom_right = camera.canvas_to_ndc(Vec2::new(1024.0, 576.0));
        assert_relative_eq!(bottom_right.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bottom_right.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_canvas_center() {
        let camera = CanvasCamera::new(1024.0, 576.0);
        let center = camera.canvas_to_ndc(Vec2::new(512.0, 288.0));
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-5);
        assert_eq!(camera.size(), Vec2::new(1024.0, 576.0));
    }
}
