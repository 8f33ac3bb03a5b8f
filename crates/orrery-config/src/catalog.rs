//! Body catalog: per-body physical radius, orbital distance, and color.
//!
//! Injected through [`crate::Config`] instead of living in process-wide tables,
//! so components receive the data they render explicitly.

use serde::{Deserialize, Serialize};

/// Catalog name of the sun entry. When present, it overrides the sun's
/// configured radius and color; the asteroid belt never builds it.
pub const SUN_BODY_NAME: &str = "Sun";

/// A single named body in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyEntry {
    /// Display name (e.g., "Ceres").
    pub name: String,
    /// Body radius in scene units.
    pub radius: f32,
    /// Orbital distance from the origin in scene units.
    pub distance: f32,
    /// Surface color in linear RGB.
    pub color: [f32; 3],
}

impl BodyEntry {
    /// Create a catalog entry.
    pub fn new(name: impl Into<String>, radius: f32, distance: f32, color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            radius,
            distance,
            color,
        }
    }
}

/// Keyed lookup table of bodies, with hard-coded defaults for the major asteroids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyCatalog {
    /// Catalog entries, in creation order.
    pub bodies: Vec<BodyEntry>,
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self {
            bodies: vec![
                BodyEntry::new("Ceres", 1.5, 221.0, [0.55, 0.55, 0.55]),
                BodyEntry::new("Vesta", 1.0, 189.0, [0.66, 0.62, 0.57]),
                BodyEntry::new("Pallas", 0.9, 222.0, [0.6, 0.6, 0.6]),
                BodyEntry::new("Hygiea", 0.8, 251.0, [0.43, 0.4, 0.36]),
            ],
        }
    }
}

impl BodyCatalog {
    /// An empty catalog. Lookups fall back to their defaults.
    pub fn empty() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Look up an entry by name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&BodyEntry> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Radius of the named body, or `fallback` when absent.
    pub fn radius_or(&self, name: &str, fallback: f32) -> f32 {
        self.get(name).map_or(fallback, |b| b.radius)
    }

    /// Color of the named body, or `fallback` when absent.
    pub fn color_or(&self, name: &str, fallback: [f32; 3]) -> [f32; 3] {
        self.get(name).map_or(fallback, |b| b.color)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_major_asteroids() {
        let catalog = BodyCatalog::default();
        for name in ["Ceres", "Vesta", "Pallas", "Hygiea"] {
            assert!(catalog.get(name).is_some(), "{name} missing from default catalog");
        }
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_lookup_falls_back_when_absent() {
        let catalog = BodyCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.radius_or("Ceres", 2.5), 2.5);
        assert_eq!(catalog.color_or("Ceres", [1.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = BodyCatalog::default();
        assert!(catalog.get("ceres").is_none());
        assert_eq!(catalog.radius_or("Ceres", 99.0), 1.5);
    }
}
