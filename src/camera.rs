use glam::{Mat4, Quat, Vec3};

use crate::config::CameraConfig;
use crate::types::CameraUniform;

/// Perspective camera with a first-person pose.
///
/// The camera looks down its local -Z axis with +Y up and +X to the right.
/// Projection parameters are cached; changing them marks the projection
/// as stale until `update_projection_matrix` runs.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub orientation: Quat,
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    projection: Mat4,
    projection_stale: bool,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            fov_y_degrees,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
            projection_stale: true,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov_y_degrees, aspect, config.near, config.far);
        camera.position = Vec3::from_array(config.position);
        camera
    }

    /// Move along a local-space axis
    pub fn translate_on_axis(&mut self, axis: Vec3, distance: f32) {
        self.position += self.orientation * axis * distance;
    }

    /// Move along the local lateral axis (positive is right)
    pub fn translate_x(&mut self, distance: f32) {
        self.translate_on_axis(Vec3::X, distance);
    }

    /// Move along the local depth axis (negative is forward)
    pub fn translate_z(&mut self, distance: f32) {
        self.translate_on_axis(Vec3::Z, distance);
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Set the aspect ratio and mark the projection stale
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection_stale = true;
    }

    pub fn is_projection_stale(&self) -> bool {
        self.projection_stale
    }

    /// Recompute the cached projection from the current parameters
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
        self.projection_stale = false;
    }

    /// Cached projection; stale until `update_projection_matrix` is called
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Camera uniform for a view whose eye sits at `eye_offset` in local space
    pub fn to_uniform(&self, eye_offset: Vec3, aspect: f32, time: f32) -> CameraUniform {
        let eye = self.position + self.orientation * eye_offset;
        let view = Mat4::from_rotation_translation(self.orientation, eye).inverse();
        let projection = if (aspect - self.aspect).abs() <= f32::EPSILON {
            self.projection
        } else {
            Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
        };
        let view_proj = projection * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            inv_view_proj: view_proj.inverse().to_cols_array_2d(),
            position: eye.to_array(),
            time,
        }
    }
}
