//! Light sources.
//!
//! All lights are also scene objects: directional and point lights are
//! intersectable as small bulb spheres, area lights as a thin box. Rays
//! that hit any of them see a bulb, not a shaded surface.

use prism_math::{Bounds, Ray, Vec3};

use crate::color::Color;
use crate::cuboid::{box_triangles, check_dimension, intersect_triangles};
use crate::error::SceneError;
use crate::hit::SurfaceHit;
use crate::sphere::intersect_sphere;
use crate::triangle::Triangle;

/// Radius of the sphere used to make point-like lights visible.
pub const BULB_RADIUS: f32 = 0.1;

/// Largest area-light sample grid along either axis.
pub const MAX_SAMPLE_COUNT: u32 = 256;

pub(crate) fn check_sample_count(x: u32, z: u32) -> Result<(), SceneError> {
    if x == 0 || z == 0 || x > MAX_SAMPLE_COUNT || z > MAX_SAMPLE_COUNT {
        return Err(SceneError::InvalidSampleCount { x, z });
    }
    Ok(())
}

/// Ambient, diffuse and specular emission of a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightColors {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl LightColors {
    pub fn new(ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }
}

impl Default for LightColors {
    fn default() -> Self {
        Self {
            ambient: Color::gray(150),
            diffuse: Color::from_rgb8(180, 210, 230),
            specular: Color::WHITE,
        }
    }
}

/// Light arriving from a fixed direction.
///
/// The bulb sphere sits at `position`; moving it re-aims the light so it
/// shines from the bulb towards the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    position: Vec3,
    /// Unit vector from a surface towards the light
    direction: Vec3,
    pub colors: LightColors,
}

impl DirectionalLight {
    /// `direction` points from the scene towards the light.
    pub fn new(direction: Vec3) -> Self {
        Self {
            position: direction,
            direction: direction.normalize_or_zero(),
            colors: LightColors {
                ambient: Color::gray(25),
                ..LightColors::default()
            },
        }
    }

    pub fn with_colors(mut self, colors: LightColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.direction = position.normalize_or_zero();
    }

    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        intersect_sphere(self.position, BULB_RADIUS, ray)
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::new(1.0, 1.0, -1.0))
    }
}

/// Omnidirectional light with distance attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Vec3,
    pub colors: LightColors,
    pub constant_attenuation: f32,
    pub linear_attenuation: f32,
    pub quadratic_attenuation: f32,
    /// Beyond this distance only the ambient term contributes
    pub radius: f32,
}

impl PointLight {
    /// Create a point light whose attenuation falls off over `radius`.
    pub fn new(position: Vec3, radius: f32) -> Self {
        let radius = radius.max(f32::EPSILON);
        Self {
            position,
            colors: LightColors::default(),
            constant_attenuation: 1.0,
            linear_attenuation: 2.0 / radius,
            quadratic_attenuation: 1.0 / (radius * radius),
            radius,
        }
    }

    pub fn with_colors(mut self, colors: LightColors) -> Self {
        self.colors = colors;
        self
    }

    /// Override the `(constant, linear, quadratic)` attenuation coefficients.
    pub fn with_attenuation(mut self, constant: f32, linear: f32, quadratic: f32) -> Self {
        self.constant_attenuation = constant;
        self.linear_attenuation = linear;
        self.quadratic_attenuation = quadratic;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// `1 / (kc + kl*d + kq*d^2)`.
    pub fn attenuation(&self, distance: f32) -> f32 {
        let denom = self.constant_attenuation
            + self.linear_attenuation * distance
            + self.quadratic_attenuation * distance * distance;
        if denom <= 0.0 {
            1.0
        } else {
            1.0 / denom
        }
    }

    pub fn in_range(&self, distance: f32) -> bool {
        distance <= self.radius
    }

    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        intersect_sphere(self.position, BULB_RADIUS, ray)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 50.0)
    }
}

/// Rectangular light modelled as a thin axis-aligned box.
///
/// Soft shadows sample the lower face on a `sample_count_x` by
/// `sample_count_z` grid. Cell size and per-sample scale are derived state
/// and are recomputed whenever the footprint or the grid changes.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLight {
    position: Vec3,
    length: f32,
    height: f32,
    depth: f32,
    bounds: Bounds,
    triangles: [Triangle; 12],
    pub colors: LightColors,

    sample_count_x: u32,
    sample_count_z: u32,
    sample_size_x: f32,
    sample_size_z: f32,
    sample_scale: f32,
}

impl AreaLight {
    /// Light centered at `position` with extents along x (length), y
    /// (height) and z (depth). Starts with a 2x2 sample grid.
    pub fn new(position: Vec3, length: f32, height: f32, depth: f32) -> Result<Self, SceneError> {
        let length = check_dimension("length", length)?;
        let height = check_dimension("height", height)?;
        let depth = check_dimension("depth", depth)?;

        Ok(Self::from_extents(position, length, height, depth))
    }

    fn from_extents(position: Vec3, length: f32, height: f32, depth: f32) -> Self {
        let bounds = Bounds::from_center(position, length, height, depth);
        let mut light = Self {
            position,
            length,
            height,
            depth,
            bounds,
            triangles: box_triangles(&bounds),
            colors: LightColors::default(),
            sample_count_x: 2,
            sample_count_z: 2,
            sample_size_x: 0.0,
            sample_size_z: 0.0,
            sample_scale: 0.0,
        };
        light.regenerate();
        light
    }

    pub fn with_colors(mut self, colors: LightColors) -> Self {
        self.colors = colors;
        self
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

    /// Minimum corner; the sampled face lies at its `y`.
    pub fn lower_layer_position(&self) -> Vec3 {
        self.bounds.min()
    }

    pub fn sample_count(&self) -> (u32, u32) {
        (self.sample_count_x, self.sample_count_z)
    }

    /// Size of one grid cell along x and z.
    pub fn sample_size(&self) -> (f32, f32) {
        (self.sample_size_x, self.sample_size_z)
    }

    /// Weight of a single sample, `1 / (count_x * count_z)`.
    pub fn sample_scale(&self) -> f32 {
        self.sample_scale
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.regenerate();
    }

    pub fn set_sample_count(&mut self, x: u32, z: u32) -> Result<(), SceneError> {
        check_sample_count(x, z)?;

        self.sample_count_x = x;
        self.sample_count_z = z;
        self.regenerate();
        Ok(())
    }

    /// Point on the lower face inside cell `(ix, iz)`, with `jitter` in
    /// `[0, 1)` selecting the position within the cell.
    pub fn cell_point(&self, ix: u32, iz: u32, jitter_x: f32, jitter_z: f32) -> Vec3 {
        let lower = self.lower_layer_position();
        Vec3::new(
            lower.x + (ix as f32 + jitter_x) * self.sample_size_x,
            lower.y,
            lower.z + (iz as f32 + jitter_z) * self.sample_size_z,
        )
    }

    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        intersect_triangles(&self.bounds, &self.triangles, ray)
    }

    fn regenerate(&mut self) {
        self.bounds = Bounds::from_center(self.position, self.length, self.height, self.depth);
        self.triangles = box_triangles(&self.bounds);

        self.sample_size_x = self.bounds.x.size() / self.sample_count_x as f32;
        self.sample_size_z = self.bounds.z.size() / self.sample_count_z as f32;
        self.sample_scale = 1.0 / (self.sample_count_x as f32 * self.sample_count_z as f32);
    }
}

impl Default for AreaLight {
    fn default() -> Self {
        Self::from_extents(Vec3::ZERO, 1.0, 0.1, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_light_follows_bulb() {
        let mut light = DirectionalLight::default();
        assert!((light.direction().length() - 1.0).abs() < 1e-6);

        light.set_position(Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(light.direction(), Vec3::Y);
        assert_eq!(light.position(), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_bulb_is_hittable() {
        let light = PointLight::new(Vec3::new(0.0, 0.0, 5.0), 50.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = light.intersect(&ray).unwrap();
        assert!((hit.t - (5.0 - BULB_RADIUS)).abs() < 1e-4);
    }

    #[test]
    fn test_point_light_attenuation() {
        let light = PointLight::new(Vec3::ZERO, 50.0);

        assert_eq!(light.attenuation(0.0), 1.0);
        // 1 + 2 + 1 at d = r
        assert!((light.attenuation(50.0) - 0.25).abs() < 1e-6);
        assert!(light.in_range(50.0));
        assert!(!light.in_range(50.5));
    }

    #[test]
    fn test_area_light_sampling_state() {
        let mut light = AreaLight::new(Vec3::new(0.0, 3.0, 0.0), 2.0, 0.1, 4.0).unwrap();

        assert_eq!(light.sample_count(), (2, 2));
        assert_eq!(light.sample_size(), (1.0, 2.0));
        assert_eq!(light.sample_scale(), 0.25);

        light.set_sample_count(4, 8).unwrap();
        assert_eq!(light.sample_size(), (0.5, 0.5));
        assert_eq!(light.sample_scale(), 1.0 / 32.0);

        assert_eq!(
            light.set_sample_count(0, 3),
            Err(SceneError::InvalidSampleCount { x: 0, z: 3 })
        );
        assert_eq!(light.sample_count(), (4, 8));
    }

    #[test]
    fn test_area_light_rejects_huge_grid() {
        let mut light = AreaLight::default();

        assert_eq!(
            light.set_sample_count(u32::MAX, 2),
            Err(SceneError::InvalidSampleCount { x: u32::MAX, z: 2 })
        );
        assert!(light.set_sample_count(70_000, 70_000).is_err());
        assert_eq!(light.sample_count(), (2, 2));

        light.set_sample_count(MAX_SAMPLE_COUNT, MAX_SAMPLE_COUNT).unwrap();
        let expected = 1.0 / (MAX_SAMPLE_COUNT as f32 * MAX_SAMPLE_COUNT as f32);
        assert_eq!(light.sample_scale(), expected);
    }

    #[test]
    fn test_area_light_cells_cover_lower_face() {
        let light = AreaLight::new(Vec3::new(1.0, 3.0, -1.0), 2.0, 0.2, 2.0).unwrap();
        let lower = light.lower_layer_position();

        assert!((lower - Vec3::new(0.0, 2.9, -2.0)).length() < 1e-5);

        let first = light.cell_point(0, 0, 0.0, 0.0);
        let last = light.cell_point(1, 1, 1.0, 1.0);
        assert!((first - lower).length() < 1e-5);
        assert!((last - Vec3::new(2.0, 2.9, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_area_light_moves_with_position() {
        let mut light = AreaLight::default();
        light.set_position(Vec3::new(0.0, 5.0, 0.0));

        let ray = Ray::new(Vec3::new(0.1, 0.0, 0.2), Vec3::Y);
        let hit = light.intersect(&ray).unwrap();
        assert!((hit.t - 4.95).abs() < 1e-4);
        assert!((hit.normal - Vec3::NEG_Y).length() < 1e-5);
    }
}
