//! Prism Core - Scene data model for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Colours and materials**: `Color`, `Material`
//! - **Primitives**: `Sphere`, `Plane`, `Triangle`, `Cuboid`
//! - **Lights**: `DirectionalLight`, `PointLight`, `AreaLight`
//! - **Scene graph**: `Object`, `Scene` and the uniform `IntersectionInfo`
//!
//! # Example
//!
//! ```
//! use prism_core::{Material, Object, PointLight, Scene, Sphere};
//! use prism_math::Vec3;
//!
//! let mut scene = Scene::new("demo");
//! let ball = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);
//! scene.add(Object::new(ball).with_material(Material::default()));
//! scene.add(Object::new(PointLight::new(Vec3::new(0.0, 3.0, 3.0), 50.0)));
//!
//! assert_eq!(scene.point_lights().count(), 1);
//! ```

pub mod color;
pub mod cuboid;
pub mod error;
pub mod hit;
pub mod light;
pub mod material;
pub mod object;
pub mod plane;
pub mod scene;
pub mod sphere;
pub mod triangle;

// Re-export commonly used types
pub use color::Color;
pub use cuboid::Cuboid;
pub use error::SceneError;
pub use hit::{IntersectionInfo, SurfaceHit};
pub use light::{
    AreaLight, DirectionalLight, LightColors, PointLight, MAX_SAMPLE_COUNT, BULB_RADIUS,
};
pub use material::Material;
pub use object::{Object, ObjectId, ObjectKind, Shape};
pub use plane::Plane;
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::Triangle;
