//! Procedural mesh generation: UV spheres, irregular asteroid deformation,
//! smooth vertex normals, and the vertex formats handed to the render engine.

pub mod irregular;
pub mod mesh_data;
pub mod normals;
pub mod sphere;
pub mod vertex_format;

pub use irregular::{
    ASTEROID_HEIGHT_SEGMENTS, ASTEROID_WIDTH_SEGMENTS, deform_irregular, irregular_asteroid,
    irregular_distortion,
};
pub use mesh_data::{MeshData, MeshVertex, PointCloud, PointVertex};
pub use normals::compute_vertex_normals;
pub use sphere::sphere;
pub use vertex_format::{MESH_VERTEX_LAYOUT, POINT_VERTEX_LAYOUT};
