//! Direct lighting.
//!
//! Phong or Blinn-Phong evaluated for every light in the scene and summed
//! with saturation. Ambient terms are always added; diffuse and specular
//! are scaled by the light's visibility.

use prism_core::{AreaLight, Color, DirectionalLight, LightColors, Material, PointLight, Scene};
use prism_math::{reflect, Vec3};
use rand::RngCore;

use crate::settings::{LightingModel, RenderSettings};
use crate::shadow::{center_samples, hard_shadow_factor, is_sample_visible, stratified_samples};

/// Checkerboard colours used when plane texturing is on.
pub const CHECKER_LIGHT: Color = Color { r: 0.9, g: 0.9, b: 0.9, a: 1.0 };
pub const CHECKER_DARK: Color = Color { r: 0.12, g: 0.12, b: 0.12, a: 1.0 };

/// Shading inputs for one hit.
#[derive(Debug, Clone, Copy)]
pub struct ShadingPoint {
    pub point: Vec3,
    /// Unit surface normal
    pub normal: Vec3,
    /// Unit vector from the point towards the viewer
    pub view: Vec3,
}

/// Diffuse colour of the checkerboard cell containing `point`.
///
/// Cells are `square_length` wide in x and z and alternate on
/// `(|gx| + |gz|) mod 2`.
pub fn checker_color(point: Vec3, square_length: u32) -> Color {
    let size = square_length.max(1) as f32;
    let gx = (point.x / size).floor() as i64;
    let gz = (point.z / size).floor() as i64;

    if (gx.abs() + gz.abs()) % 2 == 0 {
        CHECKER_LIGHT
    } else {
        CHECKER_DARK
    }
}

/// Diffuse plus specular for a unit `to_light` direction, unscaled.
pub fn diffuse_specular(
    material: &Material,
    colors: &LightColors,
    surface: &ShadingPoint,
    to_light: Vec3,
    model: LightingModel,
) -> Color {
    let n_dot_l = surface.normal.dot(to_light).max(0.0);
    let diffuse = material.diffuse * colors.diffuse * n_dot_l;

    let specular_angle = match model {
        LightingModel::Phong => reflect(-to_light, surface.normal).dot(surface.view).max(0.0),
        LightingModel::BlinnPhong => {
            let half = (to_light + surface.view).normalize_or_zero();
            surface.normal.dot(half).max(0.0)
        }
    };
    let specular = material.specular * colors.specular * specular_angle.powf(material.shininess);

    diffuse + specular
}

pub fn shade_directional(
    light: &DirectionalLight,
    material: &Material,
    surface: &ShadingPoint,
    shade_factor: f32,
    model: LightingModel,
) -> Color {
    let ambient = material.ambient * light.colors.ambient;
    let lit = diffuse_specular(material, &light.colors, surface, light.direction(), model);
    ambient + lit * shade_factor
}

/// Attenuated by distance; out of range only the ambient term remains.
pub fn shade_point(
    light: &PointLight,
    material: &Material,
    surface: &ShadingPoint,
    shade_factor: f32,
    model: LightingModel,
) -> Color {
    let ambient = material.ambient * light.colors.ambient;

    let to_light = light.position() - surface.point;
    let distance = to_light.length();
    if !light.in_range(distance) {
        return ambient;
    }

    let to_light = to_light.normalize_or_zero();
    let lit = diffuse_specular(material, &light.colors, surface, to_light, model);
    ambient + lit * (light.attenuation(distance) * shade_factor)
}

/// Sum of `scale * visibility * (diffuse + specular)` over the light's
/// sample grid. Visibility is only tested when soft shadows are on.
pub fn shade_area(
    light: &AreaLight,
    material: &Material,
    surface: &ShadingPoint,
    scene: &Scene,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let mut color = material.ambient * light.colors.ambient;
    let scale = light.sample_scale();

    let samples = if settings.soft_shadows_enabled {
        stratified_samples(light, rng)
    } else {
        center_samples(light)
    };

    for sample in samples {
        if settings.soft_shadows_enabled && !is_sample_visible(surface.point, sample, scene) {
            continue;
        }

        let to_light = (sample - surface.point).normalize_or_zero();
        let model = settings.lighting_model;
        let lit = diffuse_specular(material, &light.colors, surface, to_light, model);
        color += lit * scale;
    }

    color
}

/// Direct lighting from every light in the scene.
pub fn direct_lighting(
    material: &Material,
    surface: &ShadingPoint,
    scene: &Scene,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let shade_factor = if settings.shadows_enabled {
        hard_shadow_factor(surface.point, scene)
    } else {
        1.0
    };
    let model = settings.lighting_model;

    let mut color = Color::TRANSPARENT;
    for light in scene.directional_lights() {
        color += shade_directional(light, material, surface, shade_factor, model);
    }
    for light in scene.point_lights() {
        color += shade_point(light, material, surface, shade_factor, model);
    }
    for light in scene.area_lights() {
        color += shade_area(light, material, surface, scene, settings, rng);
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Cuboid, Object, Sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_rgb(c: Color, expected: [f32; 3]) {
        for (got, want) in [c.r, c.g, c.b].into_iter().zip(expected) {
            assert!((got - want).abs() < 1e-5, "{got} != {want}");
        }
    }

    fn white_light() -> LightColors {
        LightColors::new(Color::WHITE, Color::WHITE, Color::WHITE)
    }

    fn tinted() -> Material {
        Material::new(
            Color::rgb(0.1, 0.1, 0.1),
            Color::rgb(0.4, 0.2, 0.1),
            Color::rgb(0.5, 0.5, 0.5),
            2.0,
        )
    }

    /// Viewer 30 degrees to one side of the normal.
    fn oblique_view() -> ShadingPoint {
        ShadingPoint {
            view: Vec3::new(-0.5, 0.75f32.sqrt(), 0.0),
            ..facing_up()
        }
    }

    /// Unit vector 60 degrees from the normal, opposite the viewer.
    fn sixty_degrees() -> Vec3 {
        Vec3::new(0.75f32.sqrt(), 0.5, 0.0)
    }

    fn facing_up() -> ShadingPoint {
        ShadingPoint {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            view: Vec3::Y,
        }
    }

    fn in_range(c: Color) -> bool {
        [c.r, c.g, c.b, c.a].iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_checker_alternates() {
        let a = checker_color(Vec3::new(0.5, 0.0, 0.5), 1);
        let b = checker_color(Vec3::new(1.5, 0.0, 0.5), 1);
        let c = checker_color(Vec3::new(-0.5, 0.0, 0.5), 1);

        assert_eq!(a, CHECKER_LIGHT);
        assert_eq!(b, CHECKER_DARK);
        assert_eq!(c, CHECKER_DARK);
        assert_eq!(checker_color(Vec3::new(2.5, 0.0, 0.5), 2), CHECKER_DARK);
    }

    #[test]
    fn test_phong_and_blinn_agree_head_on() {
        let material = Material::default();
        let colors = LightColors::default();
        let surface = facing_up();

        let phong = diffuse_specular(&material, &colors, &surface, Vec3::Y, LightingModel::Phong);
        let blinn =
            diffuse_specular(&material, &colors, &surface, Vec3::Y, LightingModel::BlinnPhong);
        assert_eq!(phong, blinn);
    }

    #[test]
    fn test_blinn_phong_differs_off_axis() {
        let material = Material::default().with_shininess(4.0);
        let colors = LightColors::default();
        let surface = ShadingPoint {
            view: Vec3::new(0.0, 1.0, 1.0).normalize(),
            ..facing_up()
        };
        let to_light = Vec3::new(0.0, 1.0, -0.5).normalize();

        let phong = diffuse_specular(&material, &colors, &surface, to_light, LightingModel::Phong);
        let blinn =
            diffuse_specular(&material, &colors, &surface, to_light, LightingModel::BlinnPhong);
        assert_ne!(phong, blinn);
    }

    #[test]
    fn test_phong_by_hand() {
        // n.l = 0.5, r.v = cos 30
        let color = diffuse_specular(
            &tinted(),
            &white_light(),
            &oblique_view(),
            sixty_degrees(),
            LightingModel::Phong,
        );

        let specular = 0.5 * 0.75;
        assert_rgb(color, [0.2 + specular, 0.1 + specular, 0.05 + specular]);
    }

    #[test]
    fn test_blinn_phong_by_hand() {
        // Half vector is 15 degrees off the normal
        let color = diffuse_specular(
            &tinted(),
            &white_light(),
            &oblique_view(),
            sixty_degrees(),
            LightingModel::BlinnPhong,
        );

        let specular = 0.5 * 15f32.to_radians().cos().powi(2);
        assert_rgb(color, [0.2 + specular, 0.1 + specular, 0.05 + specular]);
    }

    #[test]
    fn test_light_below_horizon_adds_nothing() {
        let below = Vec3::new(0.75f32.sqrt(), -0.5, 0.0);
        let model = LightingModel::Phong;
        let color = diffuse_specular(&tinted(), &white_light(), &oblique_view(), below, model);

        assert_rgb(color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_point_light_by_hand() {
        // Two units away at 60 degrees; radius 4 gives 1 / (1 + 1 + 0.25)
        let light = PointLight::new(sixty_degrees() * 2.0, 4.0).with_colors(white_light());
        let color = shade_point(&light, &tinted(), &oblique_view(), 1.0, LightingModel::Phong);

        let attenuation = 1.0 / 2.25;
        let specular = 0.5 * 0.75;
        assert_rgb(
            color,
            [
                0.1 + (0.2 + specular) * attenuation,
                0.1 + (0.1 + specular) * attenuation,
                0.1 + (0.05 + specular) * attenuation,
            ],
        );
    }

    #[test]
    fn test_full_shadow_leaves_ambient() {
        let material = Material::default();
        let light = DirectionalLight::new(Vec3::Y);

        let shaded = shade_directional(&light, &material, &facing_up(), 0.0, LightingModel::Phong);
        assert_eq!(shaded, material.ambient * light.colors.ambient);
    }

    #[test]
    fn test_point_light_out_of_range_is_ambient_only() {
        let material = Material::default();
        let light = PointLight::new(Vec3::new(0.0, 10.0, 0.0), 5.0);

        let shaded = shade_point(&light, &material, &facing_up(), 1.0, LightingModel::Phong);
        assert_eq!(shaded, material.ambient * light.colors.ambient);
    }

    #[test]
    fn test_point_light_attenuates() {
        let material = Material::new(Color::TRANSPARENT, Color::WHITE, Color::TRANSPARENT, 1.0);
        let near = PointLight::new(Vec3::new(0.0, 1.0, 0.0), 50.0);
        let far = PointLight::new(Vec3::new(0.0, 10.0, 0.0), 50.0);

        let near = shade_point(&near, &material, &facing_up(), 1.0, LightingModel::Phong);
        let far = shade_point(&far, &material, &facing_up(), 1.0, LightingModel::Phong);
        assert!(near.r > far.r);
    }

    #[test]
    fn test_direct_lighting_is_bounded() {
        let mut scene = Scene::new("bright");
        for i in 0..8 {
            scene.add(Object::new(PointLight::new(Vec3::new(i as f32, 1.0, 0.0), 50.0)));
        }
        scene.add(Object::new(AreaLight::default()));
        scene.add(Object::new(Sphere::new(Vec3::new(0.0, -5.0, 0.0), 1.0)));

        let material = Material::default().with_shininess(1.0);
        let mut rng = StdRng::seed_from_u64(0);
        let settings = RenderSettings::default();
        let color = direct_lighting(&material, &facing_up(), &scene, &settings, &mut rng);

        assert!(in_range(color));
    }

    #[test]
    fn test_covered_area_light_leaves_ambient() {
        let light = AreaLight::new(Vec3::new(0.0, 5.0, 0.0), 2.0, 0.1, 2.0).unwrap();
        let ambient = tinted().ambient * light.colors.ambient;

        let mut scene = Scene::new("roof");
        scene.add(Object::new(light));
        scene.add(Object::new(Cuboid::new(Vec3::new(0.0, 2.5, 0.0), 20.0, 0.5, 20.0).unwrap()));
        scene.set_area_light_sample_count(4, 4).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let settings = RenderSettings::default();
        let color = direct_lighting(&tinted(), &facing_up(), &scene, &settings, &mut rng);
        assert_rgb(color, [ambient.r, ambient.g, ambient.b]);
    }

    #[test]
    fn test_half_covered_area_light_halves_lighting() {
        // Far away, so every sample lights the point the same way
        let mut light = AreaLight::new(Vec3::new(0.0, 1000.0, 0.0), 2.0, 0.1, 2.0).unwrap();
        light.set_sample_count(4, 4).unwrap();
        let material = Material::new(
            Color::rgb(0.1, 0.1, 0.1),
            Color::rgb(0.5, 0.5, 0.5),
            Color::TRANSPARENT,
            1.0,
        );
        let ambient = material.ambient * light.colors.ambient;
        let settings = RenderSettings::default();

        // Wall over x < 0 halfway up
        let mut wall = Scene::new("wall");
        let block = Cuboid::new(Vec3::new(-50.0, 500.0, 0.0), 100.0, 1.0, 200.0).unwrap();
        wall.add(Object::new(block));

        let mut rng = StdRng::seed_from_u64(11);
        let empty = Scene::default();
        let open = shade_area(&light, &material, &facing_up(), &empty, &settings, &mut rng);
        let half = shade_area(&light, &material, &facing_up(), &wall, &settings, &mut rng);

        assert!(open.r > ambient.r + 0.1);
        let channels = [
            (half.r, open.r, ambient.r),
            (half.g, open.g, ambient.g),
            (half.b, open.b, ambient.b),
        ];
        for (h, o, a) in channels {
            assert!(((h - a) - 0.5 * (o - a)).abs() < 1e-4, "{h} vs {o}");
        }
    }

    #[test]
    fn test_no_lights_is_background() {
        let scene = Scene::default();
        let settings = RenderSettings::default();
        let mut rng = StdRng::seed_from_u64(0);

        let material = Material::default();
        let color = direct_lighting(&material, &facing_up(), &scene, &settings, &mut rng);
        assert_eq!(color, Color::TRANSPARENT);
    }
}
