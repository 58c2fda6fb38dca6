/// Closed range of `f32` values.
///
/// Used for slab extents in [`Bounds`](crate::Bounds), for ray parameter
/// ranges and for clamping colour channels and cosines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Colour channels live here.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Valid range of an angle cosine.
    pub const COSINE: Interval = Interval { min: -1.0, max: 1.0 };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Inclusive on both ends.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
