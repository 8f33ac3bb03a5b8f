//! Error types for scene component construction.

use orrery_scene::SceneError;

/// Errors from [`crate::SunBody::create`].
#[derive(Debug, thiserror::Error)]
pub enum SunError {
    /// The engine refused a resource while building the sun. Nothing was left allocated.
    #[error("sun initialization failed: {0}")]
    Initialization(#[source] SceneError),

    /// A configured dimension cannot be tessellated. Nothing was allocated.
    #[error("invalid sun {field}: {value} (must be positive and finite)")]
    InvalidConfig {
        /// Offending field name.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
}

/// Errors from [`crate::AsteroidBelt::create`].
#[derive(Debug, thiserror::Error)]
pub enum BeltError {
    /// The engine refused a resource while building the belt. Nothing was left allocated.
    #[error("asteroid belt initialization failed: {0}")]
    Initialization(#[source] SceneError),
}
