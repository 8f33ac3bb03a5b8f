//! Command-line argument parsing for Orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural sun and asteroid belt scene")]
pub struct CliArgs {
    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Multiplier applied to each frame's time step.
    #[arg(long)]
    pub time_scale: Option<f64>,

    /// Seed for asteroid placement and corona particles.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip building the sun's particle corona.
    #[arg(long)]
    pub no_corona: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(frames) = args.frames {
            self.simulation.frames = frames;
        }
        if let Some(scale) = args.time_scale {
            self.simulation.time_scale = scale;
        }
        if let Some(seed) = args.seed {
            self.sun.seed = seed;
            self.belt.seed = seed;
        }
        if args.no_corona {
            self.sun.corona_enabled = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            frames: Some(10),
            seed: Some(7),
            no_corona: true,
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.simulation.frames, 10);
        assert_eq!(config.sun.seed, 7);
        assert_eq!(config.belt.seed, 7);
        assert!(!config.sun.corona_enabled);
        // Non-overridden fields retain defaults
        assert_eq!(config.simulation.time_scale, 1.0);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "orrery",
            "--frames",
            "120",
            "--time-scale",
            "2.5",
            "--no-corona",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.frames, Some(120));
        assert_eq!(args.time_scale, Some(2.5));
        assert!(args.no_corona);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }
}
