//! Intersection records.

use prism_math::{Ray, Vec3};

use crate::object::Object;

/// Geometric result of a primitive-level intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Distance along the (unit) ray direction
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
}

impl SurfaceHit {
    pub fn new(ray: &Ray, t: f32, normal: Vec3) -> Self {
        Self {
            t,
            point: ray.at(t),
            normal,
        }
    }
}

/// Result of intersecting a ray with an object or the whole scene.
///
/// A miss is always `ray_length == -1` with no object, so callers handle
/// hits and misses through the same type.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionInfo<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Distance along the ray, `-1.0` on a miss
    pub ray_length: f32,
    /// The object that was hit
    pub object: Option<&'a Object>,
}

impl<'a> IntersectionInfo<'a> {
    /// The no-hit sentinel.
    pub fn miss() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            ray_length: -1.0,
            object: None,
        }
    }

    /// Attach an object to a primitive hit.
    pub fn from_surface(hit: SurfaceHit, object: &'a Object) -> Self {
        Self {
            point: hit.point,
            normal: hit.normal,
            ray_length: hit.t,
            object: Some(object),
        }
    }

    pub fn is_hit(&self) -> bool {
        self.object.is_some() && self.ray_length > 0.0
    }
}

impl Default for IntersectionInfo<'_> {
    fn default() -> Self {
        Self::miss()
    }
}
