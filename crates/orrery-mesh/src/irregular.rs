//! Irregular asteroid meshes: a coarse sphere displaced by a three-octave
//! sine lattice, then re-lit with smooth normals.

use glam::Vec3;

use crate::mesh_data::MeshData;
use crate::normals::compute_vertex_normals;
use crate::sphere::sphere;

/// Longitude segments for asteroid spheres. Kept coarse so many asteroids stay cheap.
pub const ASTEROID_WIDTH_SEGMENTS: u32 = 12;

/// Latitude segments for asteroid spheres.
pub const ASTEROID_HEIGHT_SEGMENTS: u32 = 8;

/// (frequency, weight) of each octave, applied in this order.
const OCTAVES: [(f32, f32); 3] = [(3.0, 0.2), (7.0, 0.1), (13.0, 0.05)];

/// Radial scale factor for an undeformed vertex position.
///
/// `1 + Σ weight · sin(f·x) · sin(f·y) · sin(f·z)` over the octaves
/// `(3, 0.2)`, `(7, 0.1)`, `(13, 0.05)`. Pure and deterministic; the result
/// always lies in `[0.65, 1.35]`.
pub fn irregular_distortion(p: Vec3) -> f32 {
    let mut sum = 0.0;
    for (freq, weight) in OCTAVES {
        sum += weight * (freq * p.x).sin() * (freq * p.y).sin() * (freq * p.z).sin();
    }
    1.0 + sum
}

/// Scale every vertex by [`irregular_distortion`] of its current position.
///
/// Normals are left stale; call [`compute_vertex_normals`] afterwards.
pub fn deform_irregular(mesh: &mut MeshData) {
    for vertex in &mut mesh.vertices {
        let p = vertex.pos();
        vertex.position = (p * irregular_distortion(p)).into();
    }
}

/// Build a lit irregular asteroid mesh of the given base radius.
///
/// # Panics
///
/// Panics if `radius` is not positive and finite.
pub fn irregular_asteroid(radius: f32) -> MeshData {
    let mut mesh = sphere(radius, ASTEROID_WIDTH_SEGMENTS, ASTEROID_HEIGHT_SEGMENTS);
    deform_irregular(&mut mesh);
    compute_vertex_normals(&mut mesh);
    mesh
}
