//! The [`SceneGraph`] capability trait.

use orrery_mesh::{MeshData, PointCloud};

use crate::error::SceneError;
use crate::types::{Color, GeometryId, Material, MaterialId, NodeId, NodeKind, Transform};

/// Operations a rendering engine exposes to scene components.
///
/// Resource creation is fallible: geometry, material, and node allocation can be
/// refused by the engine. Mutators and releases report unknown handles as
/// errors instead of panicking, so a double release is always recoverable.
pub trait SceneGraph {
    /// Upload an indexed triangle mesh.
    fn create_geometry(&mut self, mesh: &MeshData) -> Result<GeometryId, SceneError>;

    /// Upload a point cloud.
    fn create_point_geometry(&mut self, cloud: &PointCloud) -> Result<GeometryId, SceneError>;

    /// Create a material.
    fn create_material(&mut self, material: &Material) -> Result<MaterialId, SceneError>;

    /// Add a node, optionally under `parent`. `None` attaches it to the root.
    fn add_node(&mut self, kind: NodeKind, parent: Option<NodeId>) -> Result<NodeId, SceneError>;

    /// Replace a node's local transform.
    fn set_transform(&mut self, node: NodeId, transform: &Transform) -> Result<(), SceneError>;

    /// Show or hide a node and, implicitly, its subtree.
    fn set_visible(&mut self, node: NodeId, visible: bool) -> Result<(), SceneError>;

    /// Change a material's base color.
    fn set_material_color(&mut self, material: MaterialId, color: Color)
    -> Result<(), SceneError>;

    /// Change a material's opacity.
    fn set_material_opacity(&mut self, material: MaterialId, opacity: f32)
    -> Result<(), SceneError>;

    /// Change a light node's intensity.
    fn set_light_intensity(&mut self, node: NodeId, intensity: f32) -> Result<(), SceneError>;

    /// Change a light node's color.
    fn set_light_color(&mut self, node: NodeId, color: Color) -> Result<(), SceneError>;

    /// Detach and drop a node together with its descendants.
    ///
    /// Geometry and materials referenced by the removed nodes stay allocated
    /// until released with [`Self::dispose_geometry`] / [`Self::dispose_material`].
    fn remove_node(&mut self, node: NodeId) -> Result<(), SceneError>;

    /// Release a geometry buffer.
    fn dispose_geometry(&mut self, geometry: GeometryId) -> Result<(), SceneError>;

    /// Release a material.
    fn dispose_material(&mut self, material: MaterialId) -> Result<(), SceneError>;
}
