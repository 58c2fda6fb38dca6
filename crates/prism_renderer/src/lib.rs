//! Prism Renderer - Whitted-style CPU ray tracing
//!
//! Renders a [`prism_core::Scene`] by recursively tracing reflection and
//! refraction rays on top of Phong or Blinn-Phong direct lighting, with
//! hard shadows for directional and point lights and stratified soft
//! shadows for area lights. Frames are split into row ranges and traced
//! in parallel on a rayon pool.
//!
//! # Example
//!
//! ```
//! use prism_core::{DirectionalLight, Material, Object, Scene, Sphere};
//! use prism_math::{Camera, Vec3};
//! use prism_renderer::{render_frame, RenderSettings};
//!
//! let mut scene = Scene::new("example");
//! let ball = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
//! scene.add(Object::new(ball).with_material(Material::default()));
//! scene.add(Object::new(DirectionalLight::new(Vec3::new(0.0, 1.0, -1.0))));
//!
//! let camera = Camera::new(Vec3::ZERO, 60.0, 60.0);
//! let frame = render_frame(&scene, &camera, &RenderSettings::default(), 32, 32).unwrap();
//! assert_eq!(frame.to_rgba8().len(), 32 * 32 * 4);
//! ```

mod error;
mod intersect;
mod partition;
mod renderer;
mod settings;
mod shading;
mod shadow;
mod tracer;

pub use error::RenderError;
pub use intersect::{is_occluded, ray_scene_intersection};
pub use partition::{partition_rows, RowRange};
pub use renderer::{render_frame, render_pixel, Frame, FrameRenderer};
pub use settings::{LightingModel, RenderSettings, SettingsError, MAX_SUPER_SAMPLES};
pub use shading::{checker_color, direct_lighting, ShadingPoint, CHECKER_DARK, CHECKER_LIGHT};
pub use shadow::{hard_shadow_factor, soft_shadow_factor, stratified_samples};
pub use tracer::{polarized_reflection, refract, trace, Refraction, BACKGROUND};

/// Re-export the math types used in the public API
pub use prism_math::{Camera, Ray, Vec3};
