//! UV sphere tessellation.

use std::f32::consts::{PI, TAU};

use crate::mesh_data::{MeshData, MeshVertex};

/// Build a UV sphere centered on the origin.
///
/// Produces `(width_segments + 1) * (height_segments + 1)` vertices: the seam column
/// and the pole rows are duplicated so each ring is a closed strip. Triangles that
/// would collapse at the poles are skipped. Normals are the unit radial direction.
///
/// # Panics
///
/// Panics if `radius` is not positive and finite, `width_segments < 3`, or
/// `height_segments < 2`.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    assert!(
        radius > 0.0 && radius.is_finite(),
        "radius must be positive and finite, got {radius}"
    );
    assert!(width_segments >= 3, "need at least 3 width segments");
    assert!(height_segments >= 2, "need at least 2 height segments");

    let row_len = width_segments + 1;
    let mut vertices = Vec::with_capacity((row_len * (height_segments + 1)) as usize);

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            let dir = glam::Vec3::new(-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta);
            vertices.push(MeshVertex {
                position: (dir * radius).into(),
                normal: dir.normalize_or_zero().into(),
            });
        }
    }

    let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row_len + ix + 1;
            let b = iy * row_len + ix;
            let c = (iy + 1) * row_len + ix;
            let d = (iy + 1) * row_len + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_triangle_counts() {
        let mesh = sphere(1.0, 12, 8);
        assert_eq!(mesh.vertex_count(), 13 * 9);
        // Two triangles per quad, minus one per quad on each pole row.
        assert_eq!(mesh.triangle_count(), 12 * 8 * 2 - 2 * 12);
    }

    #[test]
    fn test_all_vertices_on_radius() {
        let mesh = sphere(5.0, 16, 12);
        for v in &mesh.vertices {
            let r = v.pos().length();
            assert!((r - 5.0).abs() < 1e-4, "vertex off sphere: r = {r}");
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        let mesh = sphere(1.0, 64, 64);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_zero_radius_rejected() {
        let _ = sphere(0.0, 12, 8);
    }
}
