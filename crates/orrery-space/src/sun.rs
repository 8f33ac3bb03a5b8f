//! The sun: an unlit surface sphere, a back-face glow shell, a colocated point
//! light, and an optional particle corona, animated by slow rotation and two
//! independent pulsation signals.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orrery_config::{BodyCatalog, SUN_BODY_NAME, SunConfig};
use orrery_mesh::sphere;
use orrery_scene::{
    Color, Material, MaterialKind, NodeId, NodeKind, PointLight, SceneError, SceneGraph, Side,
    Transform,
};

use crate::corona::{corona_material, corona_points};
use crate::error::SunError;
use crate::part::RenderPart;
use crate::warn_on_error;

/// Tessellation of the sun surface and glow spheres.
const SUN_SEGMENTS: u32 = 64;

/// Upper bound of the stored light intensity.
const MAX_LIGHT_INTENSITY: f32 = 3.0;

/// Glow pulsation: `sin(time · pulse_speed) · 0.1 + 0.9`, in `[0.8, 1.0]`.
pub fn glow_pulse(time: f64, pulse_speed: f32) -> f32 {
    pulse(time * f64::from(pulse_speed))
}

/// Half-rate glow pulsation driving the glow shell's scale, in `[0.8, 1.0]`.
pub fn glow_scale_pulse(time: f64, pulse_speed: f32) -> f32 {
    pulse(time * f64::from(pulse_speed) * 0.5)
}

/// Light pulsation: `sin(time · pulse_speed · 0.3) · 0.1 + 0.9`, in `[0.8, 1.0]`.
pub fn light_pulse(time: f64, pulse_speed: f32) -> f32 {
    pulse(time * f64::from(pulse_speed) * 0.3)
}

fn pulse(phase: f64) -> f32 {
    (phase.sin() * 0.1 + 0.9) as f32
}

/// Clamp into `[min, max]`, mapping NaN to `min`.
fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Animation and appearance state of the sun.
#[derive(Clone, Debug, PartialEq)]
pub struct SunState {
    /// Surface radius.
    pub radius: f32,
    /// Glow shell radius.
    pub glow_radius: f32,
    /// Surface, glow, and light color.
    pub color: Color,
    /// Base light intensity in `[0, 3]`.
    pub light_intensity: f32,
    /// Base glow opacity in `[0, 1]`.
    pub glow_opacity: f32,
    /// Uniform scale of the whole sun group.
    pub scale: f32,
    /// Accumulated animation time.
    pub time: f64,
    /// Current self-rotation about Y in radians.
    pub rotation: f32,
    /// Self-rotation speed.
    pub rotation_speed: f32,
    /// Pulsation frequency.
    pub pulse_speed: f32,
}

/// Named optional effects attached to the sun. Empty until built.
#[derive(Debug, Default)]
struct SunEffects {
    corona: Option<RenderPart>,
}

/// The sun scene component.
pub struct SunBody {
    state: SunState,
    corona_particles: u32,
    rng: ChaCha8Rng,
    glow_enabled: bool,
    light_enabled: bool,
    corona_enabled: bool,
    group: Option<NodeId>,
    surface: Option<RenderPart>,
    glow: Option<RenderPart>,
    light: Option<NodeId>,
    effects: SunEffects,
    is_initialized: bool,
}

impl SunBody {
    /// Create an uninitialized sun from configuration. Nothing is allocated until
    /// [`Self::create`].
    pub fn new(config: &SunConfig) -> Self {
        Self {
            state: SunState {
                radius: config.radius,
                glow_radius: config.glow_radius,
                color: Color::from(config.color),
                light_intensity: clamp_or_min(config.light_intensity, 0.0, MAX_LIGHT_INTENSITY),
                glow_opacity: clamp_or_min(config.glow_opacity, 0.0, 1.0),
                scale: 1.0,
                time: 0.0,
                rotation: 0.0,
                rotation_speed: config.rotation_speed,
                pulse_speed: config.pulse_speed,
            },
            corona_particles: config.corona_particles,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            glow_enabled: true,
            light_enabled: true,
            corona_enabled: config.corona_enabled,
            group: None,
            surface: None,
            glow: None,
            light: None,
            effects: SunEffects::default(),
            is_initialized: false,
        }
    }

    /// Like [`Self::new`], but a [`SUN_BODY_NAME`] catalog entry overrides the
    /// configured radius and color.
    pub fn with_catalog(config: &SunConfig, catalog: &BodyCatalog) -> Self {
        let mut sun = Self::new(config);
        sun.state.radius = catalog.radius_or(SUN_BODY_NAME, config.radius);
        sun.state.color = Color::from(catalog.color_or(SUN_BODY_NAME, config.color));
        sun
    }

    /// Current state.
    pub fn state(&self) -> &SunState {
        &self.state
    }

    /// Whether [`Self::create`] succeeded and [`Self::dispose`] has not run since.
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Root node of the sun, if created.
    pub fn group(&self) -> Option<NodeId> {
        self.group
    }

    /// Point light node, if created.
    pub fn light(&self) -> Option<NodeId> {
        self.light
    }

    /// Corona points node, if built.
    pub fn corona(&self) -> Option<NodeId> {
        self.effects.corona.map(|c| c.node)
    }

    /// Glow shell node, if created.
    pub fn glow(&self) -> Option<NodeId> {
        self.glow.map(|g| g.node)
    }

    /// Surface mesh node, if created.
    pub fn surface(&self) -> Option<NodeId> {
        self.surface.map(|s| s.node)
    }

    /// Build the sun into `scene` and return its root node.
    ///
    /// On failure every resource allocated so far is released and the sun stays
    /// uninitialized. Calling this on an initialized sun returns the existing root.
    pub fn create(&mut self, scene: &mut dyn SceneGraph) -> Result<NodeId, SunError> {
        if self.is_initialized
            && let Some(group) = self.group
        {
            log::warn!("Sun already created; keeping existing {group}");
            return Ok(group);
        }

        self.validate()?;
        match self.build(scene) {
            Ok(group) => {
                self.is_initialized = true;
                log::info!(
                    "Sun created (radius {}, glow {}, corona: {})",
                    self.state.radius,
                    self.state.glow_radius,
                    self.effects.corona.is_some()
                );
                Ok(group)
            }
            Err(e) => {
                self.release(scene);
                log::error!("Sun creation failed: {e}");
                Err(SunError::Initialization(e))
            }
        }
    }

    fn validate(&self) -> Result<(), SunError> {
        for (field, value) in [
            ("radius", self.state.radius),
            ("glow_radius", self.state.glow_radius),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                log::error!("Sun {field} {value} must be positive and finite");
                return Err(SunError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }

    fn build(&mut self, scene: &mut dyn SceneGraph) -> Result<NodeId, SceneError> {
        let group = scene.add_node(NodeKind::Group, None)?;
        self.group = Some(group);

        let surface_mesh = sphere(self.state.radius, SUN_SEGMENTS, SUN_SEGMENTS);
        self.surface = Some(RenderPart::mesh(
            scene,
            &surface_mesh,
            &Material::basic(self.state.color),
            Some(group),
        )?);

        let glow_mesh = sphere(self.state.glow_radius, SUN_SEGMENTS, SUN_SEGMENTS);
        let glow_material = Material {
            kind: MaterialKind::Basic,
            color: self.state.color,
            opacity: self.state.glow_opacity,
            transparent: true,
            side: Side::Back,
        };
        let glow = RenderPart::mesh(scene, &glow_mesh, &glow_material, Some(group))?;
        self.glow = Some(glow);

        let light = scene.add_node(
            NodeKind::PointLight(PointLight {
                color: self.state.color,
                intensity: self.state.light_intensity,
                distance: 0.0,
                decay: 0.0,
            }),
            Some(group),
        )?;
        self.light = Some(light);

        if self.corona_enabled {
            self.build_corona(scene, group)?;
        }

        scene.set_transform(group, &self.group_transform())?;
        scene.set_visible(glow.node, self.glow_enabled)?;
        scene.set_visible(light, self.light_enabled)?;
        Ok(group)
    }

    /// Build the particle corona under the sun's root node.
    ///
    /// Does nothing if the corona already exists or the sun has no root yet.
    pub fn create_corona_effect(&mut self, scene: &mut dyn SceneGraph) -> Result<(), SceneError> {
        match self.group {
            Some(group) => self.build_corona(scene, group),
            None => {
                log::debug!("Corona requested before sun creation; deferring");
                Ok(())
            }
        }
    }

    fn build_corona(&mut self, scene: &mut dyn SceneGraph, group: NodeId) -> Result<(), SceneError> {
        if self.effects.corona.is_some() {
            return Ok(());
        }
        let cloud = corona_points(&mut self.rng, self.state.radius, self.corona_particles);
        let corona = RenderPart::points(scene, &cloud, &corona_material(), Some(group))?;
        self.effects.corona = Some(corona);
        log::debug!("Corona built with {} particles", cloud.len());
        Ok(())
    }

    /// Advance rotation and pulsation by `dt`. No-op before [`Self::create`].
    pub fn update(&mut self, scene: &mut dyn SceneGraph, dt: f64) {
        if !self.is_initialized {
            return;
        }

        self.state.time += dt;
        self.state.rotation += self.state.rotation_speed * dt as f32;

        if let Some(surface) = self.surface {
            let transform = Transform {
                rotation: Vec3::new(0.0, self.state.rotation, 0.0),
                ..Transform::IDENTITY
            };
            warn_on_error(scene.set_transform(surface.node, &transform), "rotate sun");
        }

        if let Some(glow) = self.glow {
            let opacity = self.state.glow_opacity * self.glow_pulse();
            warn_on_error(
                scene.set_material_opacity(glow.material, opacity),
                "pulse glow opacity",
            );
            let scale = glow_scale_pulse(self.state.time, self.state.pulse_speed);
            let transform = Transform {
                scale: Vec3::splat(scale),
                ..Transform::IDENTITY
            };
            warn_on_error(scene.set_transform(glow.node, &transform), "pulse glow scale");
        }

        if let Some(light) = self.light {
            warn_on_error(
                scene.set_light_intensity(light, self.current_light_intensity()),
                "pulse light",
            );
        }

        if let Some(corona) = self.effects.corona {
            let transform = Transform {
                rotation: Vec3::new(0.0, self.state.rotation * 0.5, 0.0),
                ..Transform::IDENTITY
            };
            warn_on_error(scene.set_transform(corona.node, &transform), "rotate corona");
        }
    }

    /// Glow pulse at the current time.
    pub fn glow_pulse(&self) -> f32 {
        glow_pulse(self.state.time, self.state.pulse_speed)
    }

    /// Light pulse at the current time.
    pub fn light_pulse(&self) -> f32 {
        light_pulse(self.state.time, self.state.pulse_speed)
    }

    /// Light intensity currently applied: base intensity times the light pulse.
    pub fn current_light_intensity(&self) -> f32 {
        self.state.light_intensity * self.light_pulse()
    }

    fn group_transform(&self) -> Transform {
        Transform {
            scale: Vec3::splat(self.state.scale),
            ..Transform::IDENTITY
        }
    }

    /// Uniformly scale the whole sun (surface, glow, corona).
    pub fn set_scale(&mut self, scene: &mut dyn SceneGraph, scale: f32) {
        self.state.scale = scale;
        if let Some(group) = self.group {
            warn_on_error(scene.set_transform(group, &self.group_transform()), "scale sun");
        }
    }

    /// Show or hide the glow shell.
    pub fn set_glow_enabled(&mut self, scene: &mut dyn SceneGraph, enabled: bool) {
        self.glow_enabled = enabled;
        if let Some(glow) = self.glow {
            warn_on_error(scene.set_visible(glow.node, enabled), "toggle glow");
        }
    }

    /// Switch the point light on or off.
    pub fn set_light_enabled(&mut self, scene: &mut dyn SceneGraph, enabled: bool) {
        self.light_enabled = enabled;
        if let Some(light) = self.light {
            warn_on_error(scene.set_visible(light, enabled), "toggle light");
        }
    }

    /// Set the base light intensity, clamped to `[0, 3]`.
    pub fn set_light_intensity(&mut self, scene: &mut dyn SceneGraph, intensity: f32) {
        self.state.light_intensity = clamp_or_min(intensity, 0.0, MAX_LIGHT_INTENSITY);
        if let Some(light) = self.light {
            warn_on_error(
                scene.set_light_intensity(light, self.current_light_intensity()),
                "set light intensity",
            );
        }
    }

    /// Set the base glow opacity, clamped to `[0, 1]`.
    pub fn set_glow_intensity(&mut self, scene: &mut dyn SceneGraph, opacity: f32) {
        self.state.glow_opacity = clamp_or_min(opacity, 0.0, 1.0);
        if let Some(glow) = self.glow {
            let applied = self.state.glow_opacity * self.glow_pulse();
            warn_on_error(
                scene.set_material_opacity(glow.material, applied),
                "set glow intensity",
            );
        }
    }

    /// Recolor the surface, the glow shell, and the light.
    pub fn set_sun_color(&mut self, scene: &mut dyn SceneGraph, color: Color) {
        self.state.color = color;
        if let Some(surface) = self.surface {
            warn_on_error(scene.set_material_color(surface.material, color), "recolor sun");
        }
        if let Some(glow) = self.glow {
            warn_on_error(scene.set_material_color(glow.material, color), "recolor glow");
        }
        if let Some(light) = self.light {
            warn_on_error(scene.set_light_color(light, color), "recolor light");
        }
    }

    /// Show or hide the corona, building it on first enable after creation.
    pub fn set_corona_enabled(&mut self, scene: &mut dyn SceneGraph, enabled: bool) {
        self.corona_enabled = enabled;
        if enabled
            && self.effects.corona.is_none()
            && let Err(e) = self.create_corona_effect(scene)
        {
            log::warn!("Failed to build corona: {e}");
            self.corona_enabled = false;
            return;
        }
        if let Some(corona) = self.effects.corona {
            warn_on_error(scene.set_visible(corona.node, enabled), "toggle corona");
        }
    }

    /// Release every resource the sun allocated. Safe to call repeatedly.
    pub fn dispose(&mut self, scene: &mut dyn SceneGraph) {
        let was_initialized = self.is_initialized;
        self.release(scene);
        if was_initialized {
            log::info!("Sun disposed");
        }
    }

    fn release(&mut self, scene: &mut dyn SceneGraph) {
        if let Some(corona) = self.effects.corona.take() {
            corona.release(scene);
        }
        if let Some(glow) = self.glow.take() {
            glow.release(scene);
        }
        if let Some(surface) = self.surface.take() {
            surface.release(scene);
        }
        if let Some(light) = self.light.take() {
            warn_on_error(scene.remove_node(light), "remove light");
        }
        if let Some(group) = self.group.take() {
            warn_on_error(scene.remove_node(group), "remove sun group");
        }
        self.is_initialized = false;
    }
}

impl Default for SunBody {
    fn default() -> Self {
        Self::new(&SunConfig::default())
    }
}
