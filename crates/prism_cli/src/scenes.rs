//! Demo scenes.

use anyhow::Result;
use clap::ValueEnum;
use prism_core::{
    AreaLight, Color, Cuboid, DirectionalLight, Material, Object, Plane, PointLight, Scene, Sphere,
};
use prism_math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoScene {
    /// Checkered floor, mirror and glass spheres, a box and all light types
    Showcase,
    /// One diffuse sphere under a directional light
    Sphere,
}

impl DemoScene {
    pub fn build(self) -> Result<Scene> {
        match self {
            DemoScene::Showcase => showcase(),
            DemoScene::Sphere => Ok(single_sphere()),
        }
    }
}

/// Everything the tracer supports in one frame.
pub fn showcase() -> Result<Scene> {
    let mut scene = Scene::new("showcase");

    let floor = Material::default().with_reflectivity(0.15).with_shininess(32.0);
    scene.add(
        Object::new(Plane::new(Vec3::Y, Vec3::new(0.0, -1.0, 0.0)))
            .with_material(floor)
            .with_name("Floor"),
    );

    let mirror =
        Material::new(Color::gray(10), Color::gray(20), Color::WHITE, 256.0).with_reflectivity(0.9);
    scene.add(
        Object::new(Sphere::new(Vec3::new(-1.2, 0.0, 5.0), 1.0))
            .with_material(mirror)
            .with_name("Mirror"),
    );

    let glass = Material::new(Color::gray(5), Color::gray(15), Color::WHITE, 256.0)
        .with_reflectivity(1.0)
        .with_transparency(0.95, 1.5);
    scene.add(
        Object::new(Sphere::new(Vec3::new(1.0, -0.4, 3.8), 0.6))
            .with_material(glass)
            .with_name("Glass"),
    );

    scene.add(
        Object::new(Cuboid::new(Vec3::new(1.6, -0.25, 7.0), 1.0, 1.5, 1.0)?)
            .with_material(Material::matte(Color::from_rgb8(200, 70, 50))),
    );

    scene.add(Object::new(PointLight::new(Vec3::new(-2.5, 3.0, 2.0), 50.0)));
    scene.add(Object::new(DirectionalLight::new(Vec3::new(1.0, 1.0, -1.0))));
    scene.add(Object::new(AreaLight::new(Vec3::new(0.0, 4.0, 5.0), 2.0, 0.1, 2.0)?));

    log::info!(
        "Built '{}' with {} objects ({} lights)",
        scene.name,
        scene.len(),
        scene.light_count()
    );
    Ok(scene)
}

/// One sphere straight ahead of a camera at the origin.
pub fn single_sphere() -> Scene {
    let mut scene = Scene::new("sphere");
    scene.add(
        Object::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0))
            .with_material(Material::matte(Color::from_rgb8(45, 180, 210))),
    );
    scene.add(Object::new(DirectionalLight::new(Vec3::new(0.0, 1.0, -1.0))));
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_has_every_light_type() {
        let scene = showcase().unwrap();

        assert_eq!(scene.directional_lights().count(), 1);
        assert_eq!(scene.point_lights().count(), 1);
        assert_eq!(scene.area_lights().count(), 1);
        assert!(scene.find_by_name("Glass").is_some());
    }

    #[test]
    fn test_single_sphere() {
        let scene = DemoScene::Sphere.build().unwrap();
        assert_eq!(scene.len(), 2);
    }
}
