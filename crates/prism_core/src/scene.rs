//! Scene container.
//!
//! The scene owns every object. Lights are additionally indexed by type so
//! the shading engine can walk them without scanning the whole list; an
//! object is classified exactly once, when it is added.

use prism_math::Vec3;

use crate::error::SceneError;
use crate::light::{check_sample_count, AreaLight, DirectionalLight, PointLight};
use crate::object::{Object, ObjectId, ObjectKind, Shape};

/// An owning collection of objects with typed light views.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// All objects, in insertion order
    objects: Vec<Object>,

    /// Indices into `objects`
    directional_lights: Vec<usize>,
    point_lights: Vec<usize>,
    area_lights: Vec<usize>,

    /// Scene name
    pub name: String,

    next_id: u32,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an object to the scene and return its ID.
    pub fn add(&mut self, mut object: Object) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        object.register(id);

        let index = self.objects.len();
        match object.kind() {
            ObjectKind::DirectionalLight => self.directional_lights.push(index),
            ObjectKind::PointLight => self.point_lights.push(index),
            ObjectKind::AreaLight => self.area_lights.push(index),
            _ => {}
        }

        log::debug!("Added {} ({:?}) at {}", object.name(), object.kind(), object.position());
        self.objects.push(object);
        id
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by ID.
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Look up an object by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name() == name)
    }

    pub fn set_position(&mut self, id: ObjectId, position: Vec3) -> Result<(), SceneError> {
        let object = self.object_mut(id).ok_or(SceneError::UnknownObject(id))?;
        object.set_position(position);
        Ok(())
    }

    /// Resize the sampling grid of one area light.
    pub fn set_sample_count(&mut self, id: ObjectId, x: u32, z: u32) -> Result<(), SceneError> {
        let object = self.object_mut(id).ok_or(SceneError::UnknownObject(id))?;
        object
            .as_area_light_mut()
            .ok_or(SceneError::NotAnAreaLight(id))?
            .set_sample_count(x, z)
    }

    /// Resize the sampling grid of every area light.
    pub fn set_area_light_sample_count(&mut self, x: u32, z: u32) -> Result<(), SceneError> {
        check_sample_count(x, z)?;

        for &index in &self.area_lights {
            if let Some(light) = self.objects[index].as_area_light_mut() {
                light.set_sample_count(x, z)?;
            }
        }
        Ok(())
    }

    pub fn directional_lights(&self) -> impl Iterator<Item = &DirectionalLight> + '_ {
        self.directional_lights
            .iter()
            .filter_map(|&i| match self.objects[i].shape() {
                Shape::DirectionalLight(light) => Some(light),
                _ => None,
            })
    }

    pub fn point_lights(&self) -> impl Iterator<Item = &PointLight> + '_ {
        self.point_lights
            .iter()
            .filter_map(|&i| match self.objects[i].shape() {
                Shape::PointLight(light) => Some(light),
                _ => None,
            })
    }

    pub fn area_lights(&self) -> impl Iterator<Item = &AreaLight> + '_ {
        self.area_lights
            .iter()
            .filter_map(|&i| match self.objects[i].shape() {
                Shape::AreaLight(light) => Some(light),
                _ => None,
            })
    }

    /// Total number of lights of any type.
    pub fn light_count(&self) -> usize {
        self.directional_lights.len() + self.point_lights.len() + self.area_lights.len()
    }
}
