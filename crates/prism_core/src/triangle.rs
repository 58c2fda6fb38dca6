//! Triangle primitive used to assemble cuboids and area lights.

use prism_math::{Ray, Vec3, EPSILON};

use crate::hit::SurfaceHit;

/// A triangle with counter-clockwise winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
}

impl Triangle {
    /// Create a triangle. The normal follows the right-hand rule on
    /// `(v1 - v0) x (v2 - v0)`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self { v0, v1, v2, normal }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Plane hit followed by three same-side edge tests.
    ///
    /// Both faces are hittable; the returned normal is always the face
    /// normal.
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.v0 - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        let p = ray.at(t);
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (a, b) in edges {
            if self.normal.dot((b - a).cross(p - a)) < 0.0 {
                return None;
            }
        }

        Some(SurfaceHit {
            t,
            point: p,
            normal: self.normal,
        })
    }
}
