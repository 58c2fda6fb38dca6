//! Scene objects: a closed set of shapes plus identity and material.

use std::fmt;

use prism_math::{Ray, Vec3};

use crate::cuboid::Cuboid;
use crate::hit::{IntersectionInfo, SurfaceHit};
use crate::light::{AreaLight, DirectionalLight, PointLight};
use crate::material::Material;
use crate::plane::Plane;
use crate::sphere::Sphere;

/// Unique identifier assigned when an object is added to a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type tag of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Plane,
    Sphere,
    Cuboid,
    DirectionalLight,
    PointLight,
    AreaLight,
}

impl ObjectKind {
    /// Light geometry is never shaded and never casts shadows.
    pub fn is_light(self) -> bool {
        matches!(
            self,
            ObjectKind::DirectionalLight | ObjectKind::PointLight | ObjectKind::AreaLight
        )
    }

    /// Prefix for generated display names.
    pub fn label(self) -> &'static str {
        match self {
            ObjectKind::Plane => "Plane",
            ObjectKind::Sphere => "Sphere",
            ObjectKind::Cuboid => "Box",
            ObjectKind::DirectionalLight => "DirectionalLight",
            ObjectKind::PointLight => "PointLight",
            ObjectKind::AreaLight => "AreaLight",
        }
    }
}

/// Geometry of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Cuboid(Cuboid),
    DirectionalLight(DirectionalLight),
    PointLight(PointLight),
    AreaLight(AreaLight),
}

impl Shape {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Shape::Plane(_) => ObjectKind::Plane,
            Shape::Sphere(_) => ObjectKind::Sphere,
            Shape::Cuboid(_) => ObjectKind::Cuboid,
            Shape::DirectionalLight(_) => ObjectKind::DirectionalLight,
            Shape::PointLight(_) => ObjectKind::PointLight,
            Shape::AreaLight(_) => ObjectKind::AreaLight,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Plane(s) => s.intersect(ray),
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Cuboid(s) => s.intersect(ray),
            Shape::DirectionalLight(s) => s.intersect(ray),
            Shape::PointLight(s) => s.intersect(ray),
            Shape::AreaLight(s) => s.intersect(ray),
        }
    }

    pub fn position(&self) -> Vec3 {
        match self {
            Shape::Plane(s) => s.point(),
            Shape::Sphere(s) => s.center(),
            Shape::Cuboid(s) => s.position(),
            Shape::DirectionalLight(s) => s.position(),
            Shape::PointLight(s) => s.position(),
            Shape::AreaLight(s) => s.position(),
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        match self {
            Shape::Plane(s) => s.set_point(position),
            Shape::Sphere(s) => s.set_center(position),
            Shape::Cuboid(s) => s.set_position(position),
            Shape::DirectionalLight(s) => s.set_position(position),
            Shape::PointLight(s) => s.set_position(position),
            Shape::AreaLight(s) => s.set_position(position),
        }
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Plane, Sphere, Cuboid, DirectionalLight, PointLight, AreaLight);

/// A shape with identity and material.
///
/// The shape variant is fixed at construction, so the scene's typed light
/// views stay valid for the object's lifetime.
#[derive(Debug, Clone)]
pub struct Object {
    id: ObjectId,
    name: Option<String>,
    material: Material,
    shape: Shape,
}

impl Object {
    /// Create an unregistered object with the default material.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            id: ObjectId(0),
            name: None,
            material: Material::default(),
            shape: shape.into(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Display name, e.g. `Sphere3` when none was given.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> ObjectKind {
        self.shape.kind()
    }

    pub fn is_light(&self) -> bool {
        self.kind().is_light()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn position(&self) -> Vec3 {
        self.shape.position()
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.shape.set_position(position);
    }

    pub fn as_area_light_mut(&mut self) -> Option<&mut AreaLight> {
        match &mut self.shape {
            Shape::AreaLight(light) => Some(light),
            _ => None,
        }
    }

    /// Intersect this object, returning the miss sentinel if nothing is hit.
    pub fn intersect(&self, ray: &Ray) -> IntersectionInfo<'_> {
        match self.shape.intersect(ray) {
            Some(hit) => IntersectionInfo::from_surface(hit, self),
            None => IntersectionInfo::miss(),
        }
    }

    /// Called by the scene on insertion.
    pub(crate) fn register(&mut self, id: ObjectId) {
        self.id = id;
        if self.name.is_none() {
            self.name = Some(format!("{}{}", self.kind().label(), id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_kinds() {
        assert!(ObjectKind::PointLight.is_light());
        assert!(ObjectKind::AreaLight.is_light());
        assert!(ObjectKind::DirectionalLight.is_light());
        assert!(!ObjectKind::Cuboid.is_light());
        assert!(!ObjectKind::Plane.is_light());
    }

    #[test]
    fn test_object_intersect_attaches_self() {
        let object = Object::new(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let info = object.intersect(&ray);
        assert!(info.is_hit());
        assert!((info.ray_length - 4.0).abs() < 1e-4);
        assert!(std::ptr::eq(info.object.unwrap(), &object));
    }

    #[test]
    fn test_object_miss_is_uniform() {
        let object = Object::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let info = object.intersect(&ray);
        assert!(!info.is_hit());
        assert_eq!(info.ray_length, -1.0);
        assert!(info.object.is_none());
    }

    #[test]
    fn test_set_position_dispatches() {
        let mut object = Object::new(Cuboid::default());
        object.set_position(Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(object.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(object.kind(), ObjectKind::Cuboid);
        assert!(object.as_area_light_mut().is_none());
    }

    #[test]
    fn test_register_names_by_kind() {
        let mut object = Object::new(PointLight::default());
        object.register(ObjectId(7));
        assert_eq!(object.name(), "PointLight7");

        let mut named = Object::new(Plane::default()).with_name("floor");
        named.register(ObjectId(1));
        assert_eq!(named.name(), "floor");
    }
}
