//! Ray-scene intersection.

use prism_core::{IntersectionInfo, Scene};
use prism_math::Ray;

/// Nearest hit along `ray` across every object in the scene.
///
/// Linear scan; hits at distance `<= 0` are ignored. Returns
/// [`IntersectionInfo::miss`] when nothing qualifies. Read-only, so any
/// number of workers may call it on the same scene.
pub fn ray_scene_intersection<'a>(ray: &Ray, scene: &'a Scene) -> IntersectionInfo<'a> {
    let mut closest = IntersectionInfo::miss();

    for object in scene.objects() {
        let info = object.intersect(ray);
        if info.ray_length <= 0.0 || info.object.is_none() {
            continue;
        }
        if !closest.is_hit() || info.ray_length < closest.ray_length {
            closest = info;
        }
    }

    closest
}

/// True if any non-light object is hit at a distance in `(0, max_distance]`.
pub fn is_occluded(ray: &Ray, scene: &Scene, max_distance: f32) -> bool {
    scene
        .objects()
        .iter()
        .filter(|object| !object.is_light())
        .any(|object| {
            let info = object.intersect(ray);
            info.is_hit() && info.ray_length <= max_distance
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Object, ObjectKind, PointLight, Sphere};
    use prism_math::Vec3;

    fn two_spheres() -> Scene {
        let mut scene = Scene::new("two");
        scene.add(Object::new(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0)));
        scene.add(Object::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0)));
        scene
    }

    #[test]
    fn test_nearest_hit_wins() {
        let scene = two_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let info = ray_scene_intersection(&ray, &scene);
        assert!((info.ray_length - 4.0).abs() < 1e-4);
        assert_eq!(info.object.map(|o| o.name()), Some("Sphere2"));
    }

    #[test]
    fn test_miss_returns_sentinel() {
        let scene = two_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let info = ray_scene_intersection(&ray, &scene);
        assert!(!info.is_hit());
        assert_eq!(info.ray_length, -1.0);
        assert!(info.object.is_none());
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(!ray_scene_intersection(&ray, &scene).is_hit());
    }

    #[test]
    fn test_lights_are_visible_but_never_occlude() {
        let mut scene = Scene::new("light");
        scene.add(Object::new(PointLight::new(Vec3::new(0.0, 0.0, 3.0), 50.0)));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let info = ray_scene_intersection(&ray, &scene);
        assert_eq!(info.object.map(|o| o.kind()), Some(ObjectKind::PointLight));
        assert!(!is_occluded(&ray, &scene, f32::INFINITY));
    }

    #[test]
    fn test_occlusion_respects_distance() {
        let scene = two_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(is_occluded(&ray, &scene, 10.0));
        assert!(!is_occluded(&ray, &scene, 3.0));
    }
}
