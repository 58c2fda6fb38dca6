//! Shadow rays.
//!
//! Hard shadows give a single binary factor for directional and point
//! lights. Area lights are sampled on a jittered grid over their lower
//! face, and the fraction of visible samples is the soft shade factor.

use prism_core::{AreaLight, Scene};
use prism_math::{Ray, Vec3, RAY_OFFSET};
use rand::{Rng, RngCore};

use crate::intersect::is_occluded;

/// Visibility of all directional and point lights from `point`.
///
/// Returns `0.0` as soon as any light is blocked by a non-light object,
/// `1.0` otherwise. Point lights only count occluders closer than the
/// light itself.
pub fn hard_shadow_factor(point: Vec3, scene: &Scene) -> f32 {
    for light in scene.directional_lights() {
        let ray = Ray::offset(point, light.direction(), RAY_OFFSET);
        if is_occluded(&ray, scene, f32::INFINITY) {
            return 0.0;
        }
    }

    for light in scene.point_lights() {
        let to_light = light.position() - point;
        let distance = to_light.length();
        if distance <= RAY_OFFSET {
            continue;
        }

        let ray = Ray::offset(point, to_light, RAY_OFFSET);
        if is_occluded(&ray, scene, distance) {
            return 0.0;
        }
    }

    1.0
}

/// One jittered point per grid cell on the light's lower face.
pub fn stratified_samples(light: &AreaLight, rng: &mut dyn RngCore) -> Vec<Vec3> {
    let (count_x, count_z) = light.sample_count();
    let mut samples = Vec::with_capacity(count_x as usize * count_z as usize);

    for ix in 0..count_x {
        for iz in 0..count_z {
            let jitter_x: f32 = rng.gen();
            let jitter_z: f32 = rng.gen();
            samples.push(light.cell_point(ix, iz, jitter_x, jitter_z));
        }
    }

    samples
}

/// Cell centers, used when soft shadows are off.
pub fn center_samples(light: &AreaLight) -> Vec<Vec3> {
    let (count_x, count_z) = light.sample_count();
    (0..count_x)
        .flat_map(|ix| (0..count_z).map(move |iz| (ix, iz)))
        .map(|(ix, iz)| light.cell_point(ix, iz, 0.5, 0.5))
        .collect()
}

/// True if nothing but lights lies between `point` and `sample`.
pub fn is_sample_visible(point: Vec3, sample: Vec3, scene: &Scene) -> bool {
    let to_sample = sample - point;
    let distance = to_sample.length();
    if distance <= RAY_OFFSET {
        return true;
    }

    let ray = Ray::offset(point, to_sample, RAY_OFFSET);
    !is_occluded(&ray, scene, distance)
}

/// Fraction of the area light visible from `point`: the light's sample
/// scale summed over unoccluded samples.
pub fn soft_shadow_factor(
    point: Vec3,
    light: &AreaLight,
    scene: &Scene,
    rng: &mut dyn RngCore,
) -> f32 {
    let scale = light.sample_scale();
    stratified_samples(light, rng)
        .into_iter()
        .filter(|&sample| is_sample_visible(point, sample, scene))
        .map(|_| scale)
        .sum()
}
