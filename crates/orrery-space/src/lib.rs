//! Solar-system scene components: a pulsing sun with glow shell, light and particle
//! corona, and an asteroid belt of irregular procedural bodies on circular orbits.
//!
//! Both components follow the same lifecycle: construct from config, `create`
//! into a [`SceneGraph`](orrery_scene::SceneGraph), `update(dt)` once per frame,
//! and `dispose` to release every engine resource they allocated.

pub mod asteroid_belt;
pub mod corona;
pub mod error;
mod part;
pub mod sun;

pub use asteroid_belt::{AsteroidBelt, AsteroidDescriptor, AsteroidInstance, minor_field_points};
pub use corona::{CORONA_DEPTH, CORONA_PARTICLES, corona_points};
pub use error::{BeltError, SunError};
pub use orrery_config::{BeltConfig, BodyCatalog, BodyEntry, SUN_BODY_NAME, SunConfig};
pub use sun::{SunBody, SunState, glow_pulse, glow_scale_pulse, light_pulse};

use orrery_scene::SceneError;

/// Log a failed scene mutation or release without interrupting the frame.
pub(crate) fn warn_on_error(result: Result<(), SceneError>, action: &str) {
    if let Err(e) = result {
        log::warn!("Failed to {action}: {e}");
    }
}
