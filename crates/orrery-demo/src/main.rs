//! Headless Orrery demo: builds the sun and asteroid belt into an in-memory
//! scene, animates them for a fixed number of frames, then tears everything down.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orrery-demo -- --frames 1200 --seed 7`.

mod frame_loop;

use clap::Parser;
use orrery_config::{CliArgs, Config};
use orrery_scene::{HeadlessScene, SceneStats};
use orrery_space::{AsteroidBelt, BeltError, SunBody, SunError};
use tracing::{info, warn};

use frame_loop::FrameLoop;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Sun(#[from] SunError),
    #[error(transparent)]
    Belt(#[from] BeltError),
    #[error("frame step {0} must be positive and finite; check frame_time_ms and time_scale")]
    InvalidFrameTime(f64),
    #[error("{0:?} still live after dispose")]
    Leaked(SceneStats),
}

/// What a simulation run observed.
#[derive(Debug)]
struct RunReport {
    frames: u64,
    updates: u64,
    sim_time: f64,
    peak: SceneStats,
    light_intensity: f32,
    asteroids: usize,
}

/// Build the scene, run `config.simulation.frames` frames, and dispose.
fn run(config: &Config, scene: &mut HeadlessScene) -> Result<RunReport, DemoError> {
    let step = config.frame_delta();
    if !(step > 0.0 && step.is_finite()) {
        return Err(DemoError::InvalidFrameTime(step));
    }

    let mut sun = SunBody::with_catalog(&config.sun, &config.catalog);
    sun.create(scene)?;

    let mut belt = AsteroidBelt::new(&config.belt);
    if let Err(e) = belt.create(scene, &config.catalog) {
        sun.dispose(scene);
        return Err(e.into());
    }

    let peak = scene.stats();
    info!(
        "Scene built: {} nodes, {} geometries ({} KiB), {} materials",
        peak.nodes,
        peak.geometries,
        peak.geometry_bytes / 1024,
        peak.materials
    );

    let mut frames = FrameLoop::new(step);
    for frame in 0..config.simulation.frames {
        frames.tick(step, |dt, _| {
            sun.update(scene, dt);
            belt.update(scene, dt);
        });

        if frame > 0 && frame % 300 == 0 {
            info!(
                "Frame {frame}: sim time {:.0}, glow pulse {:.3}, light pulse {:.3}",
                frames.total_time(),
                sun.glow_pulse(),
                sun.light_pulse()
            );
        }
    }

    for asteroid in belt.asteroids() {
        let p = asteroid.position();
        info!(
            "{} at ({:.1}, {:.1}, {:.1}), angle {:.4} rad",
            asteroid.display_name, p.x, p.y, p.z, asteroid.orbital_angle
        );
    }

    let report = RunReport {
        frames: frames.frame_count(),
        updates: frames.update_count(),
        sim_time: frames.total_time(),
        peak,
        light_intensity: sun.current_light_intensity(),
        asteroids: belt.asteroids().len(),
    };

    belt.dispose(scene);
    sun.dispose(scene);

    let after = scene.stats();
    if after.nodes + after.geometries + after.materials > 0 {
        return Err(DemoError::Leaked(after));
    }
    if after.invalid_releases > 0 {
        warn!("{} releases targeted unknown resources", after.invalid_releases);
    }

    Ok(report)
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("orrery")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orrery_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Orrery demo: {} frames at {:.2} per frame, seed {}",
        config.simulation.frames,
        config.frame_delta(),
        config.belt.seed
    );

    let mut scene = HeadlessScene::new();
    match run(&config, &mut scene) {
        Ok(report) => info!(
            "Simulated {} frames ({} updates, {:.0} time units): {} asteroids, peak {} nodes, final light {:.3}",
            report.frames,
            report.updates,
            report.sim_time,
            report.asteroids,
            report.peak.nodes,
            report.light_intensity
        ),
        Err(e) => {
            tracing::error!("Demo failed: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> Config {
        let mut config = Config::default();
        config.simulation.frames = 30;
        config.belt.minor_count = 100;
        config.sun.corona_particles = 100;
        config
    }

    #[test]
    fn test_run_releases_everything() {
        let mut scene = HeadlessScene::new();
        let report = run(&short_config(), &mut scene).unwrap();

        assert_eq!(report.frames, 30);
        assert_eq!(report.updates, 30);
        assert_eq!(report.asteroids, 4);
        assert!(report.peak.nodes > 0);

        let stats = scene.stats();
        assert_eq!((stats.nodes, stats.geometries, stats.materials), (0, 0, 0));
        assert_eq!(stats.invalid_releases, 0);
    }

    #[test]
    fn test_run_without_corona() {
        let mut config = short_config();
        config.sun.corona_enabled = false;
        let mut with = HeadlessScene::new();
        let mut without = HeadlessScene::new();

        let full = run(&short_config(), &mut with).unwrap();
        let bare = run(&config, &mut without).unwrap();
        assert_eq!(full.peak.nodes, bare.peak.nodes + 1);
    }

    #[test]
    fn test_non_positive_frame_step_rejected_before_building() {
        let cases = [(16.0, 0.0), (0.0, 1.0), (16.0, -2.0), (f64::NAN, 1.0)];
        for (frame_time_ms, time_scale) in cases {
            let mut config = short_config();
            config.simulation.frame_time_ms = frame_time_ms;
            config.simulation.time_scale = time_scale;
            let mut scene = HeadlessScene::new();

            let err = run(&config, &mut scene).unwrap_err();
            assert!(matches!(err, DemoError::InvalidFrameTime(_)), "{err:?}");
            assert_eq!(scene.stats().allocations, 0);
        }
    }

    #[test]
    fn test_invalid_sun_config_reported() {
        let mut config = short_config();
        config.sun.radius = 0.0;
        let mut scene = HeadlessScene::new();
        let err = run(&config, &mut scene).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Sun(SunError::InvalidConfig { field: "radius", .. })
        ));
        assert_eq!(scene.stats().nodes, 0);
    }

    #[test]
    fn test_allocation_failure_reported_without_leaks() {
        let mut scene = HeadlessScene::new();
        // Enough for the sun, not for the belt.
        scene.fail_after_allocations(14);
        let err = run(&short_config(), &mut scene).unwrap_err();
        assert!(matches!(err, DemoError::Belt(_)));
        let stats = scene.stats();
        assert_eq!((stats.nodes, stats.geometries, stats.materials), (0, 0, 0));
    }
}
