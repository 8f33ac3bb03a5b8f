//! Canonical `wgpu::VertexBufferLayout`s for the geometry this crate produces.
//!
//! | Layout                  | Location | Offset | Format    | Field    |
//! |-------------------------|----------|--------|-----------|----------|
//! | [`MESH_VERTEX_LAYOUT`]  | 0        | 0      | Float32x3 | position |
//! |                         | 1        | 12     | Float32x3 | normal   |
//! | [`POINT_VERTEX_LAYOUT`] | 0        | 0      | Float32x3 | position |
//! |                         | 1        | 12     | Float32x3 | color    |
//! |                         | 2        | 24     | Float32   | size     |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::mesh_data::{MeshVertex, PointVertex};

/// Attributes of [`MeshVertex`].
pub const MESH_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
];

/// Layout for lit meshes (asteroids, sun surface, glow shell).
pub const MESH_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<MeshVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &MESH_VERTEX_ATTRIBUTES,
};

/// Attributes of [`PointVertex`].
pub const POINT_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32,
        offset: 24,
        shader_location: 2,
    },
];

/// Layout for point clouds (corona, minor asteroid field).
pub const POINT_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<PointVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &POINT_VERTEX_ATTRIBUTES,
};

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

const _: () = assert!(
    mem::size_of::<MeshVertex>() == 24,
    "MeshVertex size changed, update MESH_VERTEX_LAYOUT"
);
const _: () = assert!(
    mem::size_of::<PointVertex>() == 28,
    "PointVertex size changed, update POINT_VERTEX_LAYOUT"
);
const _: () = assert!(MESH_VERTEX_ATTRIBUTES[1].offset + 12 <= mem::size_of::<MeshVertex>() as u64);
const _: () =
    assert!(POINT_VERTEX_ATTRIBUTES[2].offset + 4 <= mem::size_of::<PointVertex>() as u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_layout_stride() {
        assert_eq!(MESH_VERTEX_LAYOUT.array_stride, 24);
        assert_eq!(MESH_VERTEX_LAYOUT.attributes.len(), 2);
    }

    #[test]
    fn test_point_layout_locations_are_sequential() {
        for (i, attr) in POINT_VERTEX_LAYOUT.attributes.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
        assert_eq!(POINT_VERTEX_LAYOUT.array_stride, 28);
    }
}
