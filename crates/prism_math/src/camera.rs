use glam::{Quat, Vec3};

use crate::Ray;

/// Distance of the derived look-at target in front of the camera.
const TARGET_DISTANCE: f32 = 3.0;

/// Pinhole camera driven by yaw/pitch angles.
///
/// Target and up vectors are derived from the rotation state; the
/// input-handling collaborator mutates the camera only through
/// `add_yaw`, `add_pitch`, `move_local` and `set_position`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    /// Vertical field of view in radians
    fov_vertical: f32,
    /// Horizontal field of view in radians
    fov_horizontal: f32,
    rotation_speed: f32,
}

/// Orthonormal camera frame. `w` points backwards (from target to eye).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl Camera {
    /// Create a new camera. Field-of-view angles are in degrees.
    pub fn new(position: Vec3, fov_vertical_deg: f32, fov_horizontal_deg: f32) -> Self {
        let mut camera = Self {
            position,
            target: position + Vec3::Z * TARGET_DISTANCE,
            up: Vec3::Y,
            yaw: 0.0,
            pitch: 0.0,
            fov_vertical: fov_vertical_deg.to_radians(),
            fov_horizontal: fov_horizontal_deg.to_radians(),
            rotation_speed: 0.03,
        };
        camera.update_view();
        camera
    }

    /// Create a camera whose horizontal field of view matches the image
    /// aspect ratio for the given vertical field of view (degrees).
    pub fn with_aspect(position: Vec3, fov_vertical_deg: f32, width: u32, height: u32) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        let half_v = (fov_vertical_deg.to_radians() * 0.5).tan();
        let fov_horizontal_deg = (2.0 * (half_v * aspect).atan()).to_degrees();
        Self::new(position, fov_vertical_deg, fov_horizontal_deg)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in radians.
    pub fn fov_vertical(&self) -> f32 {
        self.fov_vertical
    }

    /// Horizontal field of view in radians.
    pub fn fov_horizontal(&self) -> f32 {
        self.fov_horizontal
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view();
    }

    /// Rotate around the world Y axis. `amount` is scaled by the rotation
    /// speed and the frame time `dt`.
    pub fn add_yaw(&mut self, dt: f32, amount: f32) {
        self.yaw -= self.rotation_speed * amount * dt;
        self.update_view();
    }

    /// Rotate around the camera's X axis.
    pub fn add_pitch(&mut self, dt: f32, amount: f32) {
        self.pitch -= self.rotation_speed * amount * dt;
        self.update_view();
    }

    /// Move the camera by an offset expressed in camera space.
    pub fn move_local(&mut self, offset: Vec3) {
        self.position += self.rotation() * offset;
        self.update_view();
    }

    /// Recompute target and up from position and yaw/pitch.
    pub fn update_view(&mut self) {
        let rotation = self.rotation();
        self.target = self.position + rotation * (Vec3::Z * TARGET_DISTANCE);
        self.up = rotation * Vec3::Y;
    }

    /// Orthonormal frame used to generate primary rays.
    pub fn basis(&self) -> CameraBasis {
        let w = (self.position - self.target).normalize();
        let u = self.up.cross(w).normalize();
        let v = w.cross(u).normalize();
        CameraBasis { u, v, w }
    }

    /// Primary ray through the continuous image coordinate `(px, py)`,
    /// where `(0, 0)` is the top-left corner of the image.
    ///
    /// Uses the tan(half-FOV) projection on both axes.
    pub fn primary_ray(
        &self,
        basis: &CameraBasis,
        px: f32,
        py: f32,
        width: u32,
        height: u32,
    ) -> Ray {
        let half_width = width as f32 * 0.5;
        let half_height = height as f32 * 0.5;

        let normalized_x = (px - half_width) / half_width;
        let normalized_y = (half_height - py) / half_height;

        let alpha = (self.fov_horizontal * 0.5).tan() * normalized_x;
        let beta = (self.fov_vertical * 0.5).tan() * normalized_y;

        Ray::new(self.position, alpha * basis.u + beta * basis.v - basis.w)
    }

    fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), 60.0, 60.0)
    }
}
