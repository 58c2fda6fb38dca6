//! Infinite plane primitive.

use prism_math::{Ray, Vec3, EPSILON};

use crate::hit::SurfaceHit;

/// Infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    point: Vec3,
}

impl Plane {
    /// Create a plane. The normal is normalized.
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            point,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn set_point(&mut self, point: Vec3) {
        self.point = point;
    }

    /// Parallel rays and planes closer than `EPSILON` along the ray miss.
    /// The hit normal is the plane's normal regardless of the side hit.
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t <= EPSILON {
            return None;
        }

        Some(SurfaceHit::new(ray, t, self.normal))
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vec3::Y, Vec3::ZERO)
    }
}
