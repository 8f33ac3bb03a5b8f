//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::BodyCatalog;
use crate::error::ConfigError;

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Sun body settings.
    pub sun: SunConfig,
    /// Asteroid belt settings.
    pub belt: BeltConfig,
    /// Major bodies placed in the belt.
    pub catalog: BodyCatalog,
    /// Frame loop settings for the demo driver.
    pub simulation: SimulationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Sun configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunConfig {
    /// Radius of the sun surface mesh.
    pub radius: f32,
    /// Radius of the transparent glow shell. Should exceed `radius`.
    pub glow_radius: f32,
    /// Surface, glow, and light color in linear RGB.
    pub color: [f32; 3],
    /// Base point light intensity, clamped to [0, 3].
    pub light_intensity: f32,
    /// Base glow opacity, clamped to [0, 1].
    pub glow_opacity: f32,
    /// Self-rotation speed in radians per time unit.
    pub rotation_speed: f32,
    /// Angular frequency of the glow/light pulsation.
    pub pulse_speed: f32,
    /// Build the particle corona on create.
    pub corona_enabled: bool,
    /// Number of corona particles.
    pub corona_particles: u32,
    /// Seed for corona particle placement.
    pub seed: u64,
}

/// Asteroid belt configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BeltConfig {
    /// Inner edge of the minor-asteroid field.
    pub inner_radius: f32,
    /// Outer edge of the minor-asteroid field.
    pub outer_radius: f32,
    /// Vertical extent of the belt; bodies jitter within +/- half of this.
    pub thickness: f32,
    /// Number of minor asteroids rendered as points.
    pub minor_count: u32,
    /// Smallest minor-asteroid point size.
    pub min_size: f32,
    /// Largest minor-asteroid point size.
    pub max_size: f32,
    /// Rotation speed of the whole belt group about Y.
    pub belt_rotation_speed: f32,
    /// Seed for asteroid placement and rotation.
    pub seed: u64,
}

/// Frame loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of frames the demo runs before disposing the scene.
    pub frames: u32,
    /// Simulated wall-clock duration of one frame in milliseconds.
    pub frame_time_ms: f64,
    /// Multiplier applied to the time step handed to `update`.
    pub time_scale: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            glow_radius: 30.0,
            color: [1.0, 0.85, 0.3],
            light_intensity: 2.0,
            glow_opacity: 0.3,
            rotation_speed: 0.0005,
            pulse_speed: 0.001,
            corona_enabled: true,
            corona_particles: 2000,
            seed: 0,
        }
    }
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            inner_radius: 180.0,
            outer_radius: 260.0,
            thickness: 10.0,
            minor_count: 1500,
            min_size: 0.5,
            max_size: 2.0,
            belt_rotation_speed: 0.000_01,
            seed: 0,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_time_ms: 1000.0 / 60.0,
            time_scale: 1.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save ---

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                    path: config_path.clone(),
                    source,
                })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as [`CONFIG_FILE_NAME`].
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    /// Time step handed to scene updates for one simulated frame.
    pub fn frame_delta(&self) -> f64 {
        self.simulation.frame_time_ms * self.simulation.time_scale
    }
}
