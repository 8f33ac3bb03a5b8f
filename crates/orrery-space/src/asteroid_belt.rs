//! Asteroid belt: a field of point-sprite minor asteroids plus a handful of major
//! asteroids rendered as irregular procedural meshes on circular orbits.
//!
//! Major asteroids orbit with `speed = 0.0001 · sqrt(1 / distance)`, so farther
//! bodies move more slowly, and tumble about all three axes with per-axis
//! factors `(1, 0.7, 0.3)`. The whole belt group also turns slowly about Y.

use std::f64::consts::TAU;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use orrery_config::{BeltConfig, BodyCatalog, BodyEntry, SUN_BODY_NAME};
use orrery_mesh::{PointCloud, PointVertex, irregular_asteroid};
use orrery_scene::{
    Color, Material, MaterialKind, NodeId, NodeKind, SceneError, SceneGraph, Side, Transform,
};

use crate::error::BeltError;
use crate::part::RenderPart;
use crate::warn_on_error;

/// Orbital speed constant: `speed = ORBITAL_SPEED_SCALE · sqrt(1 / distance)`.
const ORBITAL_SPEED_SCALE: f64 = 0.0001;

/// Tumble speeds are drawn uniformly from `[-MAX_ROTATION_SPEED, MAX_ROTATION_SPEED]`.
const MAX_ROTATION_SPEED: f32 = 0.005;

/// Per-axis tumble factors for x, y, z.
const TUMBLE_AXES: Vec3 = Vec3::new(1.0, 0.7, 0.3);

/// Input describing one major asteroid.
#[derive(Clone, Debug, PartialEq)]
pub struct AsteroidDescriptor {
    /// Base radius before deformation.
    pub radius: f32,
    /// Orbital radius around the belt center.
    pub distance: f32,
    /// Surface color.
    pub color: Color,
    /// Display name.
    pub name: String,
}

impl AsteroidDescriptor {
    /// Create a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `radius` or `distance` are not positive and finite.
    pub fn new(radius: f32, distance: f32, color: Color, name: impl Into<String>) -> Self {
        let descriptor = Self {
            radius,
            distance,
            color,
            name: name.into(),
        };
        descriptor.assert_valid();
        descriptor
    }

    fn is_valid(&self) -> bool {
        self.radius > 0.0
            && self.radius.is_finite()
            && self.distance > 0.0
            && self.distance.is_finite()
    }

    fn assert_valid(&self) {
        assert!(
            self.radius > 0.0 && self.radius.is_finite(),
            "radius must be positive and finite, got {}",
            self.radius
        );
        assert!(
            self.distance > 0.0 && self.distance.is_finite(),
            "distance must be positive and finite, got {}",
            self.distance
        );
    }
}

impl From<&BodyEntry> for AsteroidDescriptor {
    fn from(entry: &BodyEntry) -> Self {
        Self {
            radius: entry.radius,
            distance: entry.distance,
            color: Color::from(entry.color),
            name: entry.name.clone(),
        }
    }
}

/// Animation state of one major asteroid.
#[derive(Clone, Debug)]
pub struct AsteroidInstance {
    /// Display name.
    pub display_name: String,
    /// Orbital radius.
    pub orbital_radius: f32,
    /// Current orbital angle in radians; grows without wrapping.
    pub orbital_angle: f64,
    /// Angular speed in radians per time unit.
    pub orbital_speed: f64,
    /// Signed tumble speed, scaled per axis by `(1, 0.7, 0.3)`.
    pub rotation_speed: f32,
    /// Height above the orbital plane, fixed at creation.
    pub vertical_offset: f32,
    /// Current XYZ Euler rotation.
    pub rotation: Vec3,
    part: RenderPart,
}

impl AsteroidInstance {
    /// Scene node of this asteroid.
    pub fn node(&self) -> NodeId {
        self.part.node
    }

    /// Position in the belt group's local space.
    pub fn position(&self) -> Vec3 {
        let (sin, cos) = self.orbital_angle.sin_cos();
        Vec3::new(
            (cos * f64::from(self.orbital_radius)) as f32,
            self.vertical_offset,
            (sin * f64::from(self.orbital_radius)) as f32,
        )
    }

    /// Local transform for the current state.
    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.position(),
            rotation: self.rotation,
            scale: Vec3::ONE,
        }
    }

    fn advance(&mut self, dt: f64) {
        self.orbital_angle += self.orbital_speed * dt;
        self.rotation += TUMBLE_AXES * (self.rotation_speed * dt as f32);
    }
}

/// Scatter the minor-asteroid field as points in the annulus
/// `[inner_radius, outer_radius]`, jittered vertically within the belt thickness.
pub fn minor_field_points(rng: &mut impl Rng, config: &BeltConfig) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(config.minor_count as usize);
    let span = config.outer_radius - config.inner_radius;
    let size_span = config.max_size - config.min_size;

    for _ in 0..config.minor_count {
        let r = config.inner_radius + rng.random::<f32>() * span;
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let y = (rng.random::<f32>() - 0.5) * config.thickness;

        // Gray-brown with per-rock brightness jitter.
        let shade = 0.7 + rng.random::<f32>() * 0.4;
        let color = [0.55 * shade, 0.5 * shade, 0.45 * shade];
        let size = config.min_size + rng.random::<f32>() * size_span;

        cloud.points.push(PointVertex {
            position: [angle.cos() * r, y, angle.sin() * r],
            color,
            size,
        });
    }

    cloud
}

fn minor_field_material() -> Material {
    Material {
        kind: MaterialKind::Points {
            size_attenuation: true,
            additive: false,
        },
        color: Color::WHITE,
        opacity: 0.9,
        transparent: true,
        side: Side::Front,
    }
}

/// The asteroid belt scene component.
pub struct AsteroidBelt {
    config: BeltConfig,
    rng: ChaCha8Rng,
    group: Option<NodeId>,
    minor_field: Option<RenderPart>,
    asteroids: Vec<AsteroidInstance>,
    belt_rotation: f64,
    is_initialized: bool,
    paused: bool,
    visible: bool,
}

impl AsteroidBelt {
    /// Create an uninitialized belt. Nothing is allocated until [`Self::create`].
    pub fn new(config: &BeltConfig) -> Self {
        Self {
            config: config.clone(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            group: None,
            minor_field: None,
            asteroids: Vec::new(),
            belt_rotation: 0.0,
            is_initialized: false,
            paused: false,
            visible: true,
        }
    }

    /// Tracked major asteroids, in creation order.
    pub fn asteroids(&self) -> &[AsteroidInstance] {
        &self.asteroids
    }

    /// Look up a major asteroid by display name.
    pub fn asteroid(&self, name: &str) -> Option<&AsteroidInstance> {
        self.asteroids.iter().find(|a| a.display_name == name)
    }

    /// Whether [`Self::create`] succeeded and [`Self::dispose`] has not run since.
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Whether the belt is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether `update` animates the belt: shown and not paused.
    pub fn is_enabled(&self) -> bool {
        self.visible && !self.paused
    }

    /// Root node of the belt, if created.
    pub fn group(&self) -> Option<NodeId> {
        self.group
    }

    /// Minor-asteroid points node, if created.
    pub fn minor_field(&self) -> Option<NodeId> {
        self.minor_field.map(|f| f.node)
    }

    /// Current rotation of the whole belt about Y.
    pub fn belt_rotation(&self) -> f64 {
        self.belt_rotation
    }

    /// Build the belt group, the minor field, and one major asteroid per valid
    /// catalog entry. Returns the belt's root node.
    ///
    /// Catalog entries with a non-positive radius or distance are skipped. On
    /// failure everything allocated so far is released and the belt stays
    /// uninitialized.
    pub fn create(
        &mut self,
        scene: &mut dyn SceneGraph,
        catalog: &BodyCatalog,
    ) -> Result<NodeId, BeltError> {
        if self.is_initialized
            && let Some(group) = self.group
        {
            log::warn!("Asteroid belt already created; keeping existing {group}");
            return Ok(group);
        }

        match self.build(scene, catalog) {
            Ok(group) => {
                self.is_initialized = true;
                log::info!(
                    "Asteroid belt created: {} major asteroids, {} minor",
                    self.asteroids.len(),
                    self.config.minor_count
                );
                Ok(group)
            }
            Err(e) => {
                self.release(scene);
                log::error!("Asteroid belt creation failed: {e}");
                Err(BeltError::Initialization(e))
            }
        }
    }

    fn build(
        &mut self,
        scene: &mut dyn SceneGraph,
        catalog: &BodyCatalog,
    ) -> Result<NodeId, SceneError> {
        let group = scene.add_node(NodeKind::Group, None)?;
        self.group = Some(group);

        if self.config.minor_count > 0 {
            let cloud = minor_field_points(&mut self.rng, &self.config);
            self.minor_field = Some(RenderPart::points(
                scene,
                &cloud,
                &minor_field_material(),
                Some(group),
            )?);
        }

        for entry in &catalog.bodies {
            if entry.name == SUN_BODY_NAME {
                continue;
            }
            let descriptor = AsteroidDescriptor::from(entry);
            if !descriptor.is_valid() {
                log::warn!(
                    "Skipping catalog body {:?}: radius {} / distance {} must be positive",
                    entry.name,
                    entry.radius,
                    entry.distance
                );
                continue;
            }
            self.create_major_asteroid(scene, &descriptor)?;
        }

        if !self.visible {
            scene.set_visible(group, false)?;
        }
        Ok(group)
    }

    /// Generate one irregular asteroid, place it at a random point on its orbit,
    /// and start tracking it. Attaches under the belt group when one exists.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor's radius or distance is not positive and finite.
    pub fn create_major_asteroid(
        &mut self,
        scene: &mut dyn SceneGraph,
        descriptor: &AsteroidDescriptor,
    ) -> Result<NodeId, SceneError> {
        descriptor.assert_valid();

        let mesh = irregular_asteroid(descriptor.radius);
        let part = RenderPart::mesh(
            scene,
            &mesh,
            &Material::standard(descriptor.color, 0.9, 0.1),
            self.group,
        )?;

        let orbital_angle = self.rng.random::<f64>() * TAU;
        let vertical_offset = (self.rng.random::<f32>() - 0.5) * self.config.thickness;
        let rotation = Vec3::new(
            self.rng.random::<f32>(),
            self.rng.random::<f32>(),
            self.rng.random::<f32>(),
        ) * std::f32::consts::TAU;
        let rotation_speed = (self.rng.random::<f32>() * 2.0 - 1.0) * MAX_ROTATION_SPEED;

        let instance = AsteroidInstance {
            display_name: descriptor.name.clone(),
            orbital_radius: descriptor.distance,
            orbital_angle,
            orbital_speed: ORBITAL_SPEED_SCALE * (1.0 / f64::from(descriptor.distance)).sqrt(),
            rotation_speed,
            vertical_offset,
            rotation,
            part,
        };

        let placed = scene
            .set_transform(part.node, &instance.transform())
            .and_then(|()| scene.set_visible(part.node, self.visible));
        if let Err(e) = placed {
            part.release(scene);
            return Err(e);
        }

        log::debug!(
            "Created asteroid {} at distance {} ({} vertices)",
            instance.display_name,
            instance.orbital_radius,
            mesh.vertex_count()
        );
        self.asteroids.push(instance);
        Ok(part.node)
    }

    /// Advance orbits, tumbling, and the belt's own rotation by `dt`.
    ///
    /// No-op before [`Self::create`] or while disabled.
    pub fn update(&mut self, scene: &mut dyn SceneGraph, dt: f64) {
        if !self.is_initialized || !self.is_enabled() {
            return;
        }

        if let Some(group) = self.group {
            self.belt_rotation += f64::from(self.config.belt_rotation_speed) * dt;
            let transform = Transform {
                rotation: Vec3::new(0.0, self.belt_rotation as f32, 0.0),
                ..Transform::IDENTITY
            };
            warn_on_error(scene.set_transform(group, &transform), "rotate belt");
        }

        for asteroid in &mut self.asteroids {
            asteroid.advance(dt);
            warn_on_error(
                scene.set_transform(asteroid.part.node, &asteroid.transform()),
                "move asteroid",
            );
        }
    }

    /// Show or hide the belt. Hidden belts also stop animating.
    pub fn set_visibility(&mut self, scene: &mut dyn SceneGraph, visible: bool) {
        self.visible = visible;

        if let Some(group) = self.group {
            warn_on_error(scene.set_visible(group, visible), "toggle belt");
        }
        if let Some(field) = self.minor_field {
            warn_on_error(scene.set_visible(field.node, visible), "toggle minor field");
        }
        for asteroid in &self.asteroids {
            warn_on_error(scene.set_visible(asteroid.part.node, visible), "toggle asteroid");
        }
        log::info!(
            "Asteroid belt {}",
            if visible { "shown" } else { "hidden" }
        );
    }

    /// Pause or resume animation without changing visibility.
    ///
    /// A paused belt stays paused across [`Self::set_visibility`] calls.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.paused = !enabled;
    }

    /// Release every asteroid, the minor field, and the belt group. Safe to call
    /// repeatedly.
    pub fn dispose(&mut self, scene: &mut dyn SceneGraph) {
        let was_initialized = self.is_initialized;
        let count = self.asteroids.len();
        self.release(scene);
        if was_initialized {
            log::info!("Asteroid belt disposed ({count} major asteroids released)");
        }
    }

    fn release(&mut self, scene: &mut dyn SceneGraph) {
        for asteroid in self.asteroids.drain(..) {
            asteroid.part.release(scene);
        }
        if let Some(field) = self.minor_field.take() {
            field.release(scene);
        }
        if let Some(group) = self.group.take() {
            warn_on_error(scene.remove_node(group), "remove belt group");
        }
        self.is_initialized = false;
    }
}

impl Default for AsteroidBelt {
    fn default() -> Self {
        Self::new(&BeltConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::HeadlessScene;

    fn ceres() -> AsteroidDescriptor {
        AsteroidDescriptor::new(1.0, 100.0, Color::from_hex(0xffffff), "Ceres")
    }

    fn belt_with(scene: &mut HeadlessScene, descriptors: &[AsteroidDescriptor]) -> AsteroidBelt {
        let config = BeltConfig {
            minor_count: 0,
            seed: 42,
            ..BeltConfig::default()
        };
        let mut belt = AsteroidBelt::new(&config);
        belt.create(scene, &BodyCatalog::empty()).unwrap();
        for d in descriptors {
            belt.create_major_asteroid(scene, d).unwrap();
        }
        belt
    }

    #[test]
    fn test_ceres_scenario() {
        let mut scene = HeadlessScene::new();
        let belt = belt_with(&mut scene, &[ceres()]);
        let ceres = belt.asteroid("Ceres").unwrap();

        assert_eq!(ceres.orbital_radius, 100.0);
        assert!((ceres.orbital_speed - 0.000_01).abs() < 1e-15);

        let p = ceres.position();
        let planar = (p.x * p.x + p.z * p.z).sqrt();
        assert!((planar - 100.0).abs() < 1e-3, "planar distance {planar}");
    }

    #[test]
    fn test_planar_distance_matches_descriptor() {
        let mut scene = HeadlessScene::new();
        let descriptors: Vec<_> = [0.5_f32, 3.0, 47.0, 180.0, 1234.5]
            .iter()
            .enumerate()
            .map(|(i, &d)| AsteroidDescriptor::new(1.0, d, Color::WHITE, format!("a{i}")))
            .collect();
        let belt = belt_with(&mut scene, &descriptors);

        for (asteroid, d) in belt.asteroids().iter().zip(&descriptors) {
            let node = scene.node(asteroid.node()).unwrap();
            let t = node.transform.translation;
            let planar = (t.x * t.x + t.z * t.z).sqrt();
            assert!(
                (planar - d.distance).abs() <= d.distance * 1e-5,
                "{}: planar {planar} vs {}",
                d.name,
                d.distance
            );
        }
    }

    #[test]
    fn test_creation_randomness_within_bounds() {
        let mut scene = HeadlessScene::new();
        let descriptors: Vec<_> = (0..50)
            .map(|i| AsteroidDescriptor::new(1.0, 200.0, Color::WHITE, format!("a{i}")))
            .collect();
        let belt = belt_with(&mut scene, &descriptors);
        let half = BeltConfig::default().thickness / 2.0;

        for a in belt.asteroids() {
            assert!((-half..=half).contains(&a.vertical_offset));
            assert!((-0.005..=0.005).contains(&a.rotation_speed));
            assert!((0.0..TAU).contains(&a.orbital_angle));
            for angle in a.rotation.to_array() {
                assert!((0.0..=std::f32::consts::TAU).contains(&angle));
            }
        }
    }

    #[test]
    fn test_orbital_angle_advances_linearly() {
        let mut scene = HeadlessScene::new();
        let mut belt = belt_with(&mut scene, &[ceres()]);
        let start = belt.asteroids()[0].orbital_angle;
        let speed = belt.asteroids()[0].orbital_speed;

        let dt = 16.0;
        for n in 1..=100 {
            belt.update(&mut scene, dt);
            let angle = belt.asteroids()[0].orbital_angle;
            let expected = start + n as f64 * speed * dt;
            assert!((angle - expected).abs() < 1e-12, "step {n}: {angle} vs {expected}");
        }
    }

    #[test]
    fn test_update_moves_node_along_orbit() {
        let mut scene = HeadlessScene::new();
        let mut belt = belt_with(&mut scene, &[ceres()]);
        belt.update(&mut scene, 50_000.0);

        let asteroid = &belt.asteroids()[0];
        let t = scene.node(asteroid.node()).unwrap().transform.translation;
        let expected = asteroid.position();
        assert!((t - expected).length() < 1e-4);
        assert_eq!(t.y, asteroid.vertical_offset);
    }

    #[test]
    fn test_tumble_uses_axis_factors() {
        let mut scene = HeadlessScene::new();
        let mut belt = belt_with(&mut scene, &[ceres()]);
        let before = belt.asteroids()[0].rotation;
        let speed = belt.asteroids()[0].rotation_speed;

        belt.update(&mut scene, 10.0);
        let delta = belt.asteroids()[0].rotation - before;
        let expected = Vec3::new(1.0, 0.7, 0.3) * speed * 10.0;
        assert!((delta - expected).length() < 1e-5, "{delta} vs {expected}");
    }

    #[test]
    fn test_belt_group_rotates() {
        let mut scene = HeadlessScene::new();
        let mut belt = belt_with(&mut scene, &[]);
        belt.update(&mut scene, 1000.0);
        assert!((belt.belt_rotation() - 0.000_01 * 1000.0).abs() < 1e-9);
        let group = scene.node(belt.group().unwrap()).unwrap();
        assert!(group.transform.rotation.y > 0.0);
    }

    #[test]
    fn test_update_before_create_is_noop() {
        let mut scene = HeadlessScene::new();
        let mut belt = AsteroidBelt::default();
        belt.create_major_asteroid(&mut scene, &ceres()).unwrap();
        let start = belt.asteroids()[0].orbital_angle;
        belt.update(&mut scene, 1000.0);
        assert_eq!(belt.asteroids()[0].orbital_angle, start);
    }

    #[test]
    fn test_hidden_belt_neither_shows_nor_moves() {
        let mut scene = HeadlessScene::new();
        let mut belt = belt_with(&mut scene, &[ceres()]);
        belt.set_visibility(&mut scene, false);
        belt.set_visibility(&mut scene, false);

        assert!(!belt.is_visible());
        assert!(!scene.node(belt.group().unwrap()).unwrap().visible);
        assert!(!scene.node(belt.asteroids()[0].node()).unwrap().visible);

        let start = belt.asteroids()[0].orbital_angle;
        belt.update(&mut scene, 1000.0);
        assert_eq!(belt.asteroids()[0].orbital_angle, start);

        belt.set_visibility(&mut scene, true);
        assert!(scene.is_effectively_visible(belt.asteroids()[0].node()));
        belt.update(&mut scene, 1000.0);
        assert!(belt.asteroids()[0].orbital_angle > start);
    }

    #[test]
    fn test_set_enabled_pauses_without_hiding() {
        let mut scene = HeadlessScene::new();
        let mut belt = belt_with(&mut scene, &[ceres()]);
        belt.set_enabled(false);
        let start = belt.asteroids()[0].orbital_angle;
        belt.update(&mut scene, 1000.0);
        assert_eq!(belt.asteroids()[0].orbital_angle, start);
        assert!(belt.is_visible());
    }

    #[test]
    fn test_pause_survives_visibility_toggle() {
        let mut scene = HeadlessScene::new();
        let mut belt = belt_with(&mut scene, &[ceres()]);
        belt.set_enabled(false);
        belt.set_visibility(&mut scene, false);
        belt.set_visibility(&mut scene, true);

        assert!(belt.is_visible());
        assert!(!belt.is_enabled());
        let start = belt.asteroids()[0].orbital_angle;
        belt.update(&mut scene, 1000.0);
        assert_eq!(belt.asteroids()[0].orbital_angle, start);

        belt.set_enabled(true);
        belt.update(&mut scene, 1000.0);
        assert!(belt.asteroids()[0].orbital_angle > start);
    }

    #[test]
    fn test_sun_catalog_entry_not_built_as_asteroid() {
        let mut scene = HeadlessScene::new();
        let mut catalog = BodyCatalog::default();
        catalog
            .bodies
            .push(BodyEntry::new(SUN_BODY_NAME, 20.0, 1.0, [1.0, 0.85, 0.3]));
        let mut belt = AsteroidBelt::default();
        belt.create(&mut scene, &catalog).unwrap();
        assert_eq!(belt.asteroids().len(), 4);
        assert!(belt.asteroid(SUN_BODY_NAME).is_none());
    }

    #[test]
    fn test_create_from_default_catalog() {
        let mut scene = HeadlessScene::new();
        let mut belt = AsteroidBelt::default();
        let group = belt.create(&mut scene, &BodyCatalog::default()).unwrap();

        assert!(belt.is_initialized());
        assert_eq!(belt.asteroids().len(), 4);
        assert!(belt.asteroid("Vesta").is_some());
        // Minor field plus four asteroids.
        assert_eq!(scene.children(group).len(), 5);

        let field = scene.node(belt.minor_field().unwrap()).unwrap();
        let NodeKind::Points { geometry, .. } = field.kind else {
            panic!("minor field should be a points node");
        };
        assert_eq!(scene.geometry_elements(geometry), Some(1500));
    }

    #[test]
    fn test_invalid_catalog_entries_skipped() {
        let mut scene = HeadlessScene::new();
        let catalog = BodyCatalog {
            bodies: vec![
                BodyEntry::new("Ghost", 1.0, 0.0, [1.0; 3]),
                BodyEntry::new("Ceres", 1.0, 100.0, [1.0; 3]),
            ],
        };
        let mut belt = AsteroidBelt::default();
        belt.create(&mut scene, &catalog).unwrap();
        assert_eq!(belt.asteroids().len(), 1);
        assert!(belt.asteroid("Ghost").is_none());
    }

    #[test]
    fn test_failed_create_leaves_nothing_allocated() {
        // Group, minor field (3), four asteroids (3 each).
        for budget in 0..16 {
            let mut scene = HeadlessScene::new();
            scene.fail_after_allocations(budget);
            let mut belt = AsteroidBelt::default();
            let err = belt.create(&mut scene, &BodyCatalog::default()).unwrap_err();
            assert!(matches!(err, BeltError::Initialization(_)));
            assert!(!belt.is_initialized());
            assert!(belt.asteroids().is_empty());
            let stats = scene.stats();
            assert_eq!(
                (stats.nodes, stats.geometries, stats.materials),
                (0, 0, 0),
                "leak with budget {budget}"
            );
        }
    }

    #[test]
    fn test_dispose_releases_every_asteroid() {
        let mut scene = HeadlessScene::new();
        let mut belt = AsteroidBelt::default();
        belt.create(&mut scene, &BodyCatalog::default()).unwrap();
        assert!(scene.stats().geometries > 0);

        belt.dispose(&mut scene);
        belt.dispose(&mut scene);

        assert!(!belt.is_initialized());
        assert!(belt.asteroids().is_empty());
        let stats = scene.stats();
        assert_eq!((stats.nodes, stats.geometries, stats.materials), (0, 0, 0));
        assert_eq!(stats.invalid_releases, 0);
    }

    #[test]
    fn test_same_seed_same_belt() {
        let mut scene_a = HeadlessScene::new();
        let mut scene_b = HeadlessScene::new();
        let a = belt_with(&mut scene_a, &[ceres()]);
        let b = belt_with(&mut scene_b, &[ceres()]);
        assert_eq!(a.asteroids()[0].orbital_angle, b.asteroids()[0].orbital_angle);
        assert_eq!(a.asteroids()[0].rotation, b.asteroids()[0].rotation);
    }

    #[test]
    fn test_minor_field_within_annulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = BeltConfig::default();
        let cloud = minor_field_points(&mut rng, &config);
        assert_eq!(cloud.len(), config.minor_count as usize);
        for p in &cloud.points {
            let [x, y, z] = p.position;
            let r = (x * x + z * z).sqrt();
            assert!(r >= config.inner_radius - 1e-3 && r <= config.outer_radius + 1e-3);
            assert!(y.abs() <= config.thickness / 2.0);
            assert!(p.size >= config.min_size && p.size <= config.max_size);
        }
    }

    #[test]
    #[should_panic(expected = "distance must be positive")]
    fn test_zero_distance_rejected() {
        let _ = AsteroidDescriptor::new(1.0, 0.0, Color::WHITE, "Nowhere");
    }

    #[test]
    #[should_panic(expected = "distance must be positive")]
    fn test_negative_distance_rejected_at_creation() {
        let mut scene = HeadlessScene::new();
        let mut belt = AsteroidBelt::default();
        let descriptor = AsteroidDescriptor {
            radius: 1.0,
            distance: -5.0,
            color: Color::WHITE,
            name: "Backwards".to_string(),
        };
        let _ = belt.create_major_asteroid(&mut scene, &descriptor);
    }
}
