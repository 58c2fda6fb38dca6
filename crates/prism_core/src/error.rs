use thiserror::Error;

use crate::object::ObjectId;

/// Errors raised when the scene is mutated with invalid input.
///
/// The tracing pipeline itself never fails; these only come from the
/// mutation hooks used by the settings collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("No object with id {0} in scene")]
    UnknownObject(ObjectId),

    #[error("Area light sample grid must be between 1x1 and 256x256, got {x}x{z}")]
    InvalidSampleCount { x: u32, z: u32 },

    #[error("Invalid {name}: {value} (must be > 0)")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("Object {0} is not an area light")]
    NotAnAreaLight(ObjectId),
}
