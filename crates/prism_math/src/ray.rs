use crate::Vec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// Every primary, shadow, reflection and refraction ray is built fresh
/// through [`Ray::new`], which normalizes the direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` does not need to be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray whose origin is pushed `offset` along its own direction.
    ///
    /// Used for secondary rays leaving a surface, so they do not
    /// immediately re-hit the surface they start on.
    pub fn offset(origin: Vec3, direction: Vec3, offset: f32) -> Self {
        let direction = direction.normalize();
        Self {
            origin: origin + direction * offset,
            direction,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
