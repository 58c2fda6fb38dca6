use crate::{Interval, Ray, Vec3};

/// Axis-aligned extents of a composite shape (cuboids, area lights).
///
/// Defined by three intervals, one per axis. Also serves as a cheap
/// slab test before a composite shape walks its triangles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Bounds {
    /// Bounds of an axis-aligned box given its center and full extents
    /// along x (length), y (height) and z (depth).
    pub fn from_center(center: Vec3, length: f32, height: f32, depth: f32) -> Self {
        let half = Vec3::new(length, height, depth) * 0.5;
        Self::from_points(center - half, center + half)
    }

    /// Create bounds from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            x: Interval::new(a.x.min(b.x), a.x.max(b.x)),
            y: Interval::new(a.y.min(b.y), a.y.max(b.y)),
            z: Interval::new(a.z.min(b.z), a.z.max(b.z)),
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Full extents along each axis.
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.x.size(), self.y.size(), self.z.size())
    }

    /// Returns the center point of the bounds.
    pub fn centroid(&self) -> Vec3 {
        (self.min() + self.max()) * 0.5
    }

    /// The eight corners, bottom face (y = min) first, each face in
    /// order (-x,-z), (+x,-z), (+x,+z), (-x,+z).
    pub fn corners(&self) -> [Vec3; 8] {
        let (x0, x1) = (self.x.min, self.x.max);
        let (y0, y1) = (self.y.min, self.y.max);
        let (z0, z1) = (self.z.min, self.z.max);
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y0, z1),
            Vec3::new(x0, y0, z1),
            Vec3::new(x0, y1, z0),
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y1, z1),
            Vec3::new(x0, y1, z1),
        ]
    }

    /// Test if a ray overlaps these bounds within the given interval.
    ///
    /// Slab method. The bounds are padded slightly so that flat boxes
    /// are not rejected because of rounding.
    pub fn hit(&self, ray: &Ray, mut ray_t: Interval) -> bool {
        const PADDING: f32 = 1e-4;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let inv_dir = 1.0 / ray.direction[axis];
            let origin = ray.origin[axis];

            let mut t0 = (slab.min - PADDING - origin) * inv_dir;
            let mut t1 = (slab.max + PADDING - origin) * inv_dir;
            if inv_dir < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max < ray_t.min {
                return false;
            }
        }

        true
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }
}
