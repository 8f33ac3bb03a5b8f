//! CPU-side geometry containers with GPU-uploadable vertex types.

use bytemuck::{Pod, Zeroable};

/// A single lit-mesh vertex: position and normal, 24 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal (zero for vertices not referenced by any triangle).
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Position as a glam vector.
    pub fn pos(&self) -> glam::Vec3 {
        glam::Vec3::from(self.position)
    }
}

/// A single point-sprite vertex: position, color, and size, 28 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Point size in screen units.
    pub size: f32,
}

/// Indexed triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    /// Vertex list.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices, three per triangle.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Total upload size in bytes.
    pub fn byte_size(&self) -> usize {
        self.vertex_bytes().len() + self.index_bytes().len()
    }

    /// Largest vertex distance from the object-space origin.
    pub fn max_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.pos().length())
            .fold(0.0, f32::max)
    }
}

/// Unindexed point cloud.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    /// Points in object space.
    pub points: Vec<PointVertex>,
}

impl PointCloud {
    /// Create an empty cloud with room for `cap` points.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: Vec::with_capacity(cap),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the cloud has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point data as bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }
}
