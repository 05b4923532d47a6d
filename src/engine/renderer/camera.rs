// Screen-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Fixed 2D camera: one world unit per pixel, origin at the top-left, y growing downward
#[derive(Debug, Clone)]
pub struct Camera {
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        // top < bottom flips the y axis so screen pixels map directly
        self.view_proj = Mat4::orthographic_rh(
            0.0,
            self.viewport_width,
            self.viewport_height,
            0.0,
            -1.0,
            1.0,
        );
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::{Vec2, Vec4};

    fn clip(camera: &Camera, point: Vec2) -> Vec4 {
        camera.view_proj_matrix() * Vec4::new(point.x, point.y, 0.0, 1.0)
    }

    #[test]
    fn test_top_left_maps_to_clip_corner() {
        let camera = Camera::new(1280.0, 720.0);
        let top_left = clip(&camera, Vec2::ZERO);
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = clip(&camera, Vec2::new(1280.0, 720.0));
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }

    #[test]
    fn test_resize_keeps_pixels_square() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.resize(640.0, 480.0);

        let center = clip(&camera, Vec2::new(320.0, 240.0));
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);

        let bottom_right = clip(&camera, Vec2::new(640.0, 480.0));
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }
}
