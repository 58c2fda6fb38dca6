//! Sphere primitive.

use prism_math::{solve_quadratic, Ray, Vec3};

use crate::hit::SurfaceHit;

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Intersect `|O + tD - C|^2 = r^2`.
    ///
    /// Takes the smallest non-negative root. A ray starting inside the
    /// sphere therefore hits the far side.
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        intersect_sphere(self.center, self.radius, ray)
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.2)
    }
}

/// Shared by spheres and the light bulbs.
pub(crate) fn intersect_sphere(center: Vec3, radius: f32, ray: &Ray) -> Option<SurfaceHit> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.dot(oc) - radius * radius;

    let (t0, t1) = solve_quadratic(a, b, c)?;

    let t = if t0 >= 0.0 {
        t0
    } else if t1 >= 0.0 {
        t1
    } else {
        // Both roots behind the origin
        return None;
    };

    let point = ray.at(t);
    let normal = (point - center).normalize_or_zero();
    Some(SurfaceHit { t, point, normal })
}
