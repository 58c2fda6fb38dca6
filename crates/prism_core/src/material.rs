//! Surface description consumed by the shading engine.

use prism_math::Interval;

use crate::color::Color;

/// Phong surface material.
///
/// Owned by the object it decorates. The renderer reads it but never
/// mutates it during a trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Reflectance for the ambient term
    pub ambient: Color,

    /// Reflectance for the diffuse term
    pub diffuse: Color,

    /// Reflectance for the specular term
    pub specular: Color,

    /// Specular exponent (>= 0)
    pub shininess: f32,

    /// Mirror contribution in [0, 1]
    pub reflectivity: f32,

    /// Refracted contribution in [0, 1]
    pub transparency: f32,

    /// Index of refraction, only meaningful when `transparency > 0`
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::gray(60),
            diffuse: Color::from_rgb8(45, 180, 210),
            specular: Color::WHITE,
            shininess: 128.0,
            reflectivity: 1.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Opaque, non-reflective material with the given colours.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess: shininess.max(0.0),
            reflectivity: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }

    /// Matte material: the diffuse colour drives the ambient term too.
    pub fn matte(diffuse: Color) -> Self {
        Self::new(diffuse * 0.25, diffuse, Color::gray(40), 8.0)
    }

    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = Interval::UNIT.clamp(reflectivity);
        self
    }

    /// Make the material transparent with the given index of refraction.
    pub fn with_transparency(mut self, transparency: f32, refractive_index: f32) -> Self {
        self.transparency = Interval::UNIT.clamp(transparency);
        self.refractive_index = refractive_index.max(f32::EPSILON);
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(0.0);
        self
    }

    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency > 0.0
    }
}
