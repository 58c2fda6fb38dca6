use thiserror::Error;

use crate::settings::SettingsError;

/// Errors raised while setting up a frame.
///
/// Tracing itself never fails; these come from building the worker pool
/// or from rejected settings.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
}
