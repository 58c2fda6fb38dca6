//! Render settings.
//!
//! Every toggle and limit the tracer reads lives in [`RenderSettings`],
//! which is passed by reference into each frame and each trace call.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supersampling grid along either axis.
pub const MAX_SUPER_SAMPLES: u32 = 16;

/// Specular model used for every light type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingModel {
    /// `max(0, R.V)^shininess`
    #[default]
    Phong,
    /// `max(0, N.H)^shininess`
    BlinnPhong,
}

/// Errors when loading or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("sample_count must be > 0")]
    ZeroSampleCount,

    #[error("sample_count {0} is above the supersampling limit of 16")]
    SampleCountTooLarge(u32),

    #[error("square_length must be > 0")]
    ZeroSquareLength,

    #[error("ambient_refractive_index must be > 0, got {0}")]
    InvalidAmbientIndex(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Frame configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Maximum mirror bounces
    pub max_reflection_depth: u32,

    /// Maximum refraction bounces
    pub max_refraction_depth: u32,

    /// Trace `sample_count^2` rays per pixel on a regular grid
    pub super_sampling_enabled: bool,

    /// Supersampling grid resolution per axis
    pub sample_count: u32,

    /// Hard shadows from directional and point lights
    pub shadows_enabled: bool,

    /// Stratified soft shadows from area lights
    pub soft_shadows_enabled: bool,

    /// Checkerboard on planes
    pub plane_texturing_enabled: bool,

    /// Checkerboard square size in world units
    pub square_length: u32,

    pub reflection_enabled: bool,

    pub refraction_enabled: bool,

    pub lighting_model: LightingModel,

    /// Index of refraction of the medium the camera sits in
    pub ambient_refractive_index: f32,

    /// Render every frame instead of only on request
    pub realtime: bool,

    /// Seed for the soft shadow jitter
    pub seed: u64,

    /// Worker threads, 0 for one per hardware thread
    pub worker_count: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_reflection_depth: 3,
            max_refraction_depth: 3,
            super_sampling_enabled: false,
            sample_count: 2,
            shadows_enabled: true,
            soft_shadows_enabled: true,
            plane_texturing_enabled: true,
            square_length: 1,
            reflection_enabled: true,
            refraction_enabled: true,
            lighting_model: LightingModel::Phong,
            ambient_refractive_index: 1.0003,
            realtime: false,
            seed: 0x5eed,
            worker_count: 0,
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, SettingsError> {
        let settings: RenderSettings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.sample_count == 0 {
            return Err(SettingsError::ZeroSampleCount);
        }
        if self.sample_count > MAX_SUPER_SAMPLES {
            return Err(SettingsError::SampleCountTooLarge(self.sample_count));
        }
        if self.square_length == 0 {
            return Err(SettingsError::ZeroSquareLength);
        }
        if !(self.ambient_refractive_index > 0.0) {
            return Err(SettingsError::InvalidAmbientIndex(self.ambient_refractive_index));
        }
        Ok(())
    }

    /// Copy with out-of-range values replaced by their defaults.
    ///
    /// The renderer uses this for settings built in code that never went
    /// through [`validate`](Self::validate).
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut settings = self.clone();

        if settings.sample_count == 0 {
            log::warn!("sample_count is 0, using 1");
            settings.sample_count = 1;
        }
        if settings.sample_count > MAX_SUPER_SAMPLES {
            log::warn!(
                "sample_count {} is too large, using {}",
                settings.sample_count,
                MAX_SUPER_SAMPLES
            );
            settings.sample_count = MAX_SUPER_SAMPLES;
        }
        if settings.square_length == 0 {
            log::warn!("square_length is 0, using {}", defaults.square_length);
            settings.square_length = defaults.square_length;
        }
        if !(settings.ambient_refractive_index > 0.0) {
            log::warn!(
                "ambient_refractive_index {} is invalid, using {}",
                settings.ambient_refractive_index,
                defaults.ambient_refractive_index
            );
            settings.ambient_refractive_index = defaults.ambient_refractive_index;
        }

        settings
    }

    /// Supersampling grid size per axis actually used for a frame.
    pub fn samples_per_axis(&self) -> u32 {
        if self.super_sampling_enabled {
            self.sample_count.clamp(1, MAX_SUPER_SAMPLES)
        } else {
            1
        }
    }
}
