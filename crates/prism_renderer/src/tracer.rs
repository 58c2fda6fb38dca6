//! Recursive Whitted tracer.
//!
//! A trace ends on a miss (background), on a light (white) or after direct
//! lighting plus optional reflection and refraction children. Each of the
//! two recursion chains has its own depth budget.

use prism_core::{Color, ObjectKind, Scene};
use prism_math::{reflect, solve_quadratic, Interval, Ray, Vec3, EPSILON, RAY_OFFSET};
use rand::RngCore;

use crate::intersect::ray_scene_intersection;
use crate::settings::RenderSettings;
use crate::shading::{checker_color, direct_lighting, ShadingPoint};

/// Colour returned for rays that leave the scene.
pub const BACKGROUND: Color = Color::TRANSPARENT;

/// Indices closer than this are treated as the same medium.
const INDEX_TOLERANCE: f32 = 1e-4;

/// Outcome of refracting a ray at an interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refraction {
    /// No transmitted ray, everything is reflected
    TotalInternalReflection,
    /// Transmitted ray with the Fresnel reflectance of the interface
    Transmitted { direction: Vec3, reflectance: f32 },
}

/// Fresnel reflectance for one polarization.
///
/// Swap the cosines to get the other polarization. A vanishing
/// denominator means complete reflection.
pub fn polarized_reflection(n1: f32, n2: f32, cos_a1: f32, cos_a2: f32) -> f32 {
    let left = n1 * cos_a1;
    let right = n2 * cos_a2;
    let numer = left - right;
    let denom = (left + right) * (left + right);
    if denom < EPSILON {
        return 1.0;
    }

    ((numer * numer) / denom).min(1.0)
}

/// Refract `incident` at a surface with unit `normal`, going from a medium
/// of index `source_index` into one of index `target_index`.
///
/// The refracted direction is `incident + k * normal` with `k` a root of
/// `k^2 + 2k*cos(a1) + 1 - 1/ratio^2 = 0`. Of the two roots, the one whose
/// direction stays closest to the incident ray is the physical one.
pub fn refract(incident: Vec3, normal: Vec3, source_index: f32, target_index: f32) -> Refraction {
    let cos_a1 = Interval::COSINE.clamp(incident.dot(normal));
    let ratio = source_index / target_index;

    // Snell: sin(a2) = ratio * sin(a1)
    let sin2_a2 = ratio * ratio * (1.0 - cos_a1 * cos_a1);
    if sin2_a2 > 1.0 {
        return Refraction::TotalInternalReflection;
    }

    let Some((k0, k1)) = solve_quadratic(1.0, 2.0 * cos_a1, 1.0 - 1.0 / (ratio * ratio)) else {
        return Refraction::TotalInternalReflection;
    };

    let candidate = |k: f32| (incident + k * normal).normalize_or_zero();
    let (first, second) = (candidate(k0), candidate(k1));
    let direction = if first.dot(incident) >= second.dot(incident) {
        first
    } else {
        second
    };

    let cos_a1 = cos_a1.abs();
    let cos_a2 = Interval::COSINE.clamp(direction.dot(normal)).abs();
    let s_polarized = polarized_reflection(source_index, target_index, cos_a1, cos_a2);
    let p_polarized = polarized_reflection(source_index, target_index, cos_a2, cos_a1);

    Refraction::Transmitted {
        direction,
        reflectance: 0.5 * (s_polarized + p_polarized),
    }
}

/// Colour seen along `ray`.
///
/// `reflect_depth` and `refract_depth` are the bounces already taken; a
/// fresh primary ray starts at zero for both. The camera is assumed to sit
/// in the ambient medium.
pub fn trace(
    ray: &Ray,
    scene: &Scene,
    settings: &RenderSettings,
    reflect_depth: u32,
    refract_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    trace_in_medium(
        ray,
        scene,
        settings,
        reflect_depth,
        refract_depth,
        settings.ambient_refractive_index,
        rng,
    )
}

fn trace_in_medium(
    ray: &Ray,
    scene: &Scene,
    settings: &RenderSettings,
    reflect_depth: u32,
    refract_depth: u32,
    medium_index: f32,
    rng: &mut dyn RngCore,
) -> Color {
    let hit = ray_scene_intersection(ray, scene);
    let Some(object) = hit.object else {
        return BACKGROUND;
    };

    // Lights render as bulbs
    if object.is_light() {
        return Color::WHITE;
    }

    let mut material = *object.material();
    if settings.plane_texturing_enabled && object.kind() == ObjectKind::Plane {
        material.diffuse = checker_color(hit.point, settings.square_length);
    }

    let surface = ShadingPoint {
        point: hit.point,
        normal: hit.normal,
        view: -ray.direction,
    };
    let mut color = direct_lighting(&material, &surface, scene, settings, rng);

    // Share of the energy sent down the mirror path
    let mut reflectance = 1.0;

    if settings.refraction_enabled && material.is_transparent() {
        let target_index = if (medium_index - material.refractive_index).abs() < INDEX_TOLERANCE {
            settings.ambient_refractive_index
        } else {
            material.refractive_index
        };

        match refract(ray.direction, hit.normal, medium_index, target_index) {
            Refraction::TotalInternalReflection => reflectance = 1.0,
            Refraction::Transmitted {
                direction,
                reflectance: fresnel,
            } => {
                reflectance = fresnel;
                if refract_depth < settings.max_refraction_depth {
                    let refracted = Ray::offset(hit.point, direction, RAY_OFFSET);
                    let transmitted = trace_in_medium(
                        &refracted,
                        scene,
                        settings,
                        reflect_depth + 1,
                        refract_depth + 1,
                        target_index,
                        rng,
                    );
                    color += transmitted * (material.transparency * (1.0 - fresnel));
                }
            }
        }
    }

    if settings.reflection_enabled
        && material.is_reflective()
        && reflect_depth < settings.max_reflection_depth
    {
        let mirrored = Ray::offset(hit.point, reflect(ray.direction, hit.normal), RAY_OFFSET);
        let reflected = trace_in_medium(
            &mirrored,
            scene,
            settings,
            reflect_depth + 1,
            refract_depth,
            medium_index,
            rng,
        );
        color += reflected * (material.reflectivity * reflectance);
    }

    color
}
