// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod bounds;
mod camera;
mod interval;
mod ray;

pub use bounds::Bounds;
pub use camera::{Camera, CameraBasis};
pub use interval::Interval;
pub use ray::Ray;

/// Tolerance used by the intersection tests (parallel rays, plane distance).
pub const EPSILON: f32 = 1e-4;

/// Distance secondary rays are pushed along their direction to escape the
/// surface they start on.
pub const RAY_OFFSET: f32 = 1e-3;

/// Solve `a*x^2 + b*x + c = 0`.
///
/// Returns the real roots in ascending order, or `None` if the discriminant
/// is negative. A zero discriminant yields the repeated root twice.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    if discriminant == 0.0 {
        let x = -0.5 * b / a;
        return Some((x, x));
    }

    // Numerically stable form, avoids cancellation when b is close to sqrt(d)
    let q = if b > 0.0 {
        -0.5 * (b + discriminant.sqrt())
    } else {
        -0.5 * (b - discriminant.sqrt())
    };
    let x0 = q / a;
    let x1 = c / q;

    if x0 > x1 {
        Some((x1, x0))
    } else {
        Some((x0, x1))
    }
}

/// Mirror `incident` about `normal` (both expected to be unit length).
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}
