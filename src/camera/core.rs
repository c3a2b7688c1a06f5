use glam::{Mat4, Vec3};

use crate::geometry::find_perpendicular;

/// Perspective camera defined by eye position, focal point, up vector, and
/// projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub focal_point: Vec3,
    /// Up direction vector.
    pub view_up: Vec3,
    /// Vertical field of view in degrees.
    pub view_angle: f32,
    /// Near and far clipping distances.
    pub clipping_range: [f32; 2],
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            focal_point: Vec3::ZERO,
            view_up: Vec3::Y,
            view_angle: 30.0,
            clipping_range: [0.01, 1000.01],
        }
    }
}

impl Camera {
    /// Camera looking from `position` at `focal_point`.
    #[must_use]
    pub fn looking_at(position: Vec3, focal_point: Vec3, view_up: Vec3) -> Self {
        Self {
            position,
            focal_point,
            view_up,
            ..Self::default()
        }
    }

    /// Unit vector from the eye toward the focal point.
    #[must_use]
    pub fn direction_of_projection(&self) -> Vec3 {
        (self.focal_point - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    /// Eye-to-focal-point distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.focal_point)
    }

    /// Up vector re-orthogonalized against the view direction.
    #[must_use]
    pub fn orthogonal_view_up(&self) -> Vec3 {
        let dir = self.direction_of_projection();
        let up = self.view_up - dir * dir.dot(self.view_up);
        up.try_normalize()
            .unwrap_or_else(|| find_perpendicular(dir))
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.focal_point,
            self.orthogonal_view_up(),
        )
    }

    /// Projection matrix for the given viewport aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        // perspective_rh uses the [0,1] depth range (wgpu/Vulkan convention)
        Mat4::perspective_rh(
            self.view_angle.to_radians(),
            aspect,
            self.clipping_range[0],
            self.clipping_range[1],
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
