//! Saturating RGBA colour.

use std::ops::{Add, AddAssign, Mul};

use prism_math::Interval;

/// Normalized RGBA colour.
///
/// Every channel lives in `[0, 1]`. Addition, scaling and modulation all
/// clamp their result, so light contributions can be summed freely without
/// escaping the valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Background returned for rays that escape the scene.
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Create a colour, clamping each channel to `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: Interval::UNIT.clamp(r),
            g: Interval::UNIT.clamp(g),
            b: Interval::UNIT.clamp(b),
            a: Interval::UNIT.clamp(a),
        }
    }

    /// Opaque colour.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque colour from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Colour from 8-bit channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Grey with equal channels, opaque.
    pub fn gray(value: u8) -> Self {
        Self::from_rgb8(value, value, value)
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |c: f32| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a)]
    }

    /// Mean of a set of samples.
    ///
    /// Accumulates without clamping, so the result is the true average of
    /// in-range inputs. Returns [`Color::TRANSPARENT`] for an empty set.
    pub fn average(samples: &[Color]) -> Color {
        if samples.is_empty() {
            return Color::TRANSPARENT;
        }

        let (mut r, mut g, mut b, mut a) = (0.0, 0.0, 0.0, 0.0);
        for sample in samples {
            r += sample.r;
            g += sample.g;
            b += sample.b;
            a += sample.a;
        }

        let inv = 1.0 / samples.len() as f32;
        Color::new(r * inv, g * inv, b * inv, a * inv)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Color> for Color {
    type Output = Color;

    /// Component-wise modulation, e.g. material reflectance times light colour.
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}
