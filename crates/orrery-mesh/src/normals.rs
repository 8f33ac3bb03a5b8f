//! Smooth vertex normals for indexed meshes.

use glam::Vec3;

use crate::mesh_data::MeshData;

/// Recompute smooth per-vertex normals from the current positions.
///
/// Each triangle contributes its unnormalized face normal (length proportional to
/// its area) to its three vertices, so larger faces weigh more. Vertices not
/// referenced by any triangle end up with a zero normal. Must run after any
/// position deformation.
pub fn compute_vertex_normals(mesh: &mut MeshData) {
    let mut accum = vec![Vec3::ZERO; mesh.vertices.len()];

    for tri in mesh.indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let pa = mesh.vertices[ia].pos();
        let pb = mesh.vertices[ib].pos();
        let pc = mesh.vertices[ic].pos();

        let face = (pc - pb).cross(pa - pb);
        accum[ia] += face;
        accum[ib] += face;
        accum[ic] += face;
    }

    for (vertex, n) in mesh.vertices.iter_mut().zip(accum) {
        vertex.normal = n.normalize_or_zero().into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::sphere;

    #[test]
    fn test_sphere_normals_point_outward() {
        let mut mesh = sphere(3.0, 12, 8);
        compute_vertex_normals(&mut mesh);
        for v in &mesh.vertices {
            let n = Vec3::from(v.normal);
            if n == Vec3::ZERO {
                continue;
            }
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.dot(v.pos()) > 0.0, "normal {n} points inward at {:?}", v.position);
        }
    }

    #[test]
    fn test_recomputed_normals_close_to_radial_at_equator() {
        let mut mesh = sphere(1.0, 32, 16);
        compute_vertex_normals(&mut mesh);
        // Row 8 of 16 is the equator; skip the duplicated seam column.
        let row = 8 * 33;
        for ix in 1..32 {
            let v = &mesh.vertices[row + ix];
            let n = Vec3::from(v.normal);
            let radial = v.pos().normalize();
            assert!(n.dot(radial) > 0.99, "normal {n} deviates from radial {radial}");
        }
    }

    #[test]
    fn test_unreferenced_vertex_gets_zero_normal() {
        let mut mesh = MeshData {
            vertices: vec![Default::default(); 4],
            indices: vec![],
        };
        mesh.vertices[0].normal = [0.0, 1.0, 0.0];
        compute_vertex_normals(&mut mesh);
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 0.0]);
    }
}
