//! Axis-aligned box assembled from 12 triangles.

use prism_math::{Bounds, Interval, Ray, Vec3};

use crate::error::SceneError;
use crate::hit::SurfaceHit;
use crate::triangle::Triangle;

/// Corner indices into [`Bounds::corners`], two triangles per face, wound
/// counter-clockwise as seen from outside.
const FACES: [[usize; 3]; 12] = [
    // Bottom (-Y)
    [0, 1, 2],
    [0, 2, 3],
    // Top (+Y)
    [4, 6, 5],
    [4, 7, 6],
    // Front (-Z)
    [0, 4, 5],
    [0, 5, 1],
    // Back (+Z)
    [3, 2, 6],
    [3, 6, 7],
    // Left (-X)
    [0, 3, 7],
    [0, 7, 4],
    // Right (+X)
    [1, 5, 6],
    [1, 6, 2],
];

/// Triangulate the six faces of `bounds` with outward normals.
pub(crate) fn box_triangles(bounds: &Bounds) -> [Triangle; 12] {
    let corners = bounds.corners();
    FACES.map(|[a, b, c]| Triangle::new(corners[a], corners[b], corners[c]))
}

/// Nearest triangle hit, after a slab test against `bounds`.
pub(crate) fn intersect_triangles(
    bounds: &Bounds,
    triangles: &[Triangle],
    ray: &Ray,
) -> Option<SurfaceHit> {
    if !bounds.hit(ray, Interval::new(0.0, f32::INFINITY)) {
        return None;
    }

    triangles
        .iter()
        .filter_map(|tri| tri.intersect(ray))
        .filter(|hit| hit.t > 0.0)
        .min_by(|a, b| a.t.total_cmp(&b.t))
}

pub(crate) fn check_dimension(name: &'static str, value: f32) -> Result<f32, SceneError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(SceneError::InvalidDimension { name, value })
    }
}

/// Box centered at `position` with extents along x (length), y (height)
/// and z (depth).
///
/// The triangles are regenerated whenever the position or a dimension
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    position: Vec3,
    length: f32,
    height: f32,
    depth: f32,
    bounds: Bounds,
    triangles: [Triangle; 12],
}

impl Cuboid {
    pub fn new(position: Vec3, length: f32, height: f32, depth: f32) -> Result<Self, SceneError> {
        let length = check_dimension("length", length)?;
        let height = check_dimension("height", height)?;
        let depth = check_dimension("depth", depth)?;

        Ok(Self::from_extents(position, length, height, depth))
    }

    fn from_extents(position: Vec3, length: f32, height: f32, depth: f32) -> Self {
        let bounds = Bounds::from_center(position, length, height, depth);
        Self {
            position,
            length,
            height,
            depth,
            bounds,
            triangles: box_triangles(&bounds),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.regenerate();
    }

    pub fn set_length(&mut self, length: f32) -> Result<(), SceneError> {
        self.length = check_dimension("length", length)?;
        self.regenerate();
        Ok(())
    }

    pub fn set_height(&mut self, height: f32) -> Result<(), SceneError> {
        self.height = check_dimension("height", height)?;
        self.regenerate();
        Ok(())
    }

    pub fn set_depth(&mut self, depth: f32) -> Result<(), SceneError> {
        self.depth = check_dimension("depth", depth)?;
        self.regenerate();
        Ok(())
    }

    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        intersect_triangles(&self.bounds, &self.triangles, ray)
    }

    fn regenerate(&mut self) {
        self.bounds = Bounds::from_center(self.position, self.length, self.height, self.depth);
        self.triangles = box_triangles(&self.bounds);
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::from_extents(Vec3::ZERO, 1.0, 2.0, 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangles_face_outward() {
        let cuboid = Cuboid::default();
        let center = cuboid.position();

        for tri in cuboid.triangles() {
            let [a, b, c] = tri.vertices();
            let face_center = (a + b + c) / 3.0;
            assert!(tri.normal().dot(face_center - center) > 0.0);
        }
    }

    #[test]
    fn test_nearest_face_is_hit() {
        let cuboid = Cuboid::new(Vec3::new(0.0, 0.0, 5.0), 2.0, 2.0, 2.0).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = cuboid.intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_hit_from_each_side() {
        let cuboid = Cuboid::new(Vec3::ZERO, 2.0, 2.0, 2.0).unwrap();

        // Offset keeps the rays off the face diagonals
        let offset = Vec3::new(0.1, 0.2, 0.3);
        for dir in [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z] {
            let ray = Ray::new(-dir * 5.0 + offset, dir);
            let hit = cuboid.intersect(&ray).unwrap();
            assert!((hit.point.dot(dir) + 1.0).abs() < 1e-4);
            assert!((hit.normal + dir).length() < 1e-5);
        }
    }

    #[test]
    fn test_miss() {
        let cuboid = Cuboid::default();
        let ray = Ray::new(Vec3::new(5.0, 0.0, -5.0), Vec3::Z);

        assert!(cuboid.intersect(&ray).is_none());
    }

    #[test]
    fn test_setters_regenerate_triangles() {
        let mut cuboid = Cuboid::new(Vec3::ZERO, 2.0, 2.0, 2.0).unwrap();
        cuboid.set_length(4.0).unwrap();
        cuboid.set_position(Vec3::new(0.0, 0.0, 10.0));

        assert_eq!(cuboid.bounds().x, Interval::new(-2.0, 2.0));
        let ray = Ray::new(Vec3::new(1.5, 0.0, 0.0), Vec3::Z);
        let hit = cuboid.intersect(&ray).unwrap();
        assert!((hit.t - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_dimension() {
        let mut cuboid = Cuboid::default();

        assert_eq!(
            cuboid.set_height(0.0),
            Err(SceneError::InvalidDimension { name: "height", value: 0.0 })
        );
        assert_eq!(cuboid.height(), 2.0);
        assert!(Cuboid::new(Vec3::ZERO, -1.0, 1.0, 1.0).is_err());
    }
}
