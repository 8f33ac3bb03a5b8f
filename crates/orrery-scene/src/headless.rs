//! In-memory [`SceneGraph`] that records everything components do to it.
//!
//! Used by tests and the windowless demo in place of a GPU-backed engine. It
//! tracks live resources so leaks and double releases are observable, and can
//! be told to refuse allocations to exercise initialization failure paths.

use glam::Mat4;
use rustc_hash::FxHashMap;

use orrery_mesh::{MESH_VERTEX_LAYOUT, MeshData, POINT_VERTEX_LAYOUT, PointCloud};

use crate::error::SceneError;
use crate::graph::SceneGraph;
use crate::types::{
    Color, GeometryId, Material, MaterialId, NodeId, NodeKind, PointLight, Transform,
};

/// A node as stored by the headless scene.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRecord {
    /// What the node renders.
    pub kind: NodeKind,
    /// Parent node, `None` for root-level nodes.
    pub parent: Option<NodeId>,
    /// Local transform.
    pub transform: Transform,
    /// Local visibility flag.
    pub visible: bool,
}

#[derive(Clone, Copy, Debug)]
struct GeometryRecord {
    bytes: usize,
    elements: usize,
    stride: u64,
}

/// Snapshot of resource counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Live nodes.
    pub nodes: usize,
    /// Live geometry buffers.
    pub geometries: usize,
    /// Live materials.
    pub materials: usize,
    /// Bytes held by live geometry buffers.
    pub geometry_bytes: usize,
    /// Successful allocations since creation.
    pub allocations: u64,
    /// Removals or releases of handles that were not live.
    pub invalid_releases: u64,
}

/// Headless scene graph.
#[derive(Default)]
pub struct HeadlessScene {
    nodes: FxHashMap<NodeId, NodeRecord>,
    geometries: FxHashMap<GeometryId, GeometryRecord>,
    materials: FxHashMap<MaterialId, Material>,
    next_id: u32,
    allocations: u64,
    allocation_limit: Option<u64>,
    invalid_releases: u64,
}

impl HeadlessScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every allocation after `count` more successful ones.
    pub fn fail_after_allocations(&mut self, count: u64) {
        self.allocation_limit = Some(self.allocations + count);
    }

    /// Lift any allocation limit.
    pub fn clear_allocation_limit(&mut self) {
        self.allocation_limit = None;
    }

    /// Current resource counters.
    pub fn stats(&self) -> SceneStats {
        SceneStats {
            nodes: self.nodes.len(),
            geometries: self.geometries.len(),
            materials: self.materials.len(),
            geometry_bytes: self.geometries.values().map(|g| g.bytes).sum(),
            allocations: self.allocations,
            invalid_releases: self.invalid_releases,
        }
    }

    /// Look up a live node.
    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    /// Look up a live material.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(&id)
    }

    /// Vertex (or point) count of a live geometry.
    pub fn geometry_elements(&self, id: GeometryId) -> Option<usize> {
        self.geometries.get(&id).map(|g| g.elements)
    }

    /// Vertex stride of a live geometry, taken from its vertex buffer layout.
    pub fn geometry_stride(&self, id: GeometryId) -> Option<u64> {
        self.geometries.get(&id).map(|g| g.stride)
    }

    /// Light parameters of a live light node.
    pub fn light(&self, id: NodeId) -> Option<&PointLight> {
        match self.nodes.get(&id) {
            Some(NodeRecord {
                kind: NodeKind::PointLight(light),
                ..
            }) => Some(light),
            _ => None,
        }
    }

    /// Direct children of a node, in id order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.parent == Some(id))
            .map(|(&child, _)| child)
            .collect();
        children.sort();
        children
    }

    /// Whether the node and all its ancestors are visible.
    pub fn is_effectively_visible(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(&node_id) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Local-to-world matrix, composed through the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.nodes.get(&id)?;
        let mut matrix = node.transform.to_matrix();
        while let Some(parent) = node.parent {
            node = self.nodes.get(&parent)?;
            matrix = node.transform.to_matrix() * matrix;
        }
        Some(matrix)
    }

    fn allocate(&mut self, resource: &'static str) -> Result<u32, SceneError> {
        if let Some(limit) = self.allocation_limit
            && self.allocations >= limit
        {
            return Err(SceneError::AllocationFailed {
                resource,
                reason: "allocation budget exhausted".to_string(),
            });
        }
        self.allocations += 1;
        self.next_id += 1;
        Ok(self.next_id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeRecord, SceneError> {
        self.nodes.get_mut(&id).ok_or(SceneError::UnknownNode(id))
    }

    fn material_mut(&mut self, id: MaterialId) -> Result<&mut Material, SceneError> {
        self.materials
            .get_mut(&id)
            .ok_or(SceneError::UnknownMaterial(id))
    }

    fn light_mut(&mut self, id: NodeId) -> Result<&mut PointLight, SceneError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::PointLight(light) => Ok(light),
            _ => Err(SceneError::UnknownNode(id)),
        }
    }
}

/// Vertex data must be a whole number of `stride`-sized vertices.
fn check_stride(bytes: usize, stride: u64) -> Result<(), SceneError> {
    if bytes as u64 % stride != 0 {
        return Err(SceneError::InvalidGeometry(format!(
            "{bytes} vertex bytes is not a multiple of the {stride}-byte stride"
        )));
    }
    Ok(())
}

impl SceneGraph for HeadlessScene {
    fn create_geometry(&mut self, mesh: &MeshData) -> Result<GeometryId, SceneError> {
        let stride = MESH_VERTEX_LAYOUT.array_stride;
        check_stride(mesh.vertex_bytes().len(), stride)?;
        if mesh.indices.len() % 3 != 0 {
            return Err(SceneError::InvalidGeometry(format!(
                "{} indices do not form whole triangles",
                mesh.indices.len()
            )));
        }
        if let Some(&index) = mesh
            .indices
            .iter()
            .find(|&&i| i as usize >= mesh.vertex_count())
        {
            return Err(SceneError::InvalidGeometry(format!(
                "index {index} out of range for {} vertices",
                mesh.vertex_count()
            )));
        }

        let id = GeometryId(self.allocate("geometry")?);
        self.geometries.insert(
            id,
            GeometryRecord {
                bytes: mesh.byte_size(),
                elements: mesh.vertex_count(),
                stride,
            },
        );
        Ok(id)
    }

    fn create_point_geometry(&mut self, cloud: &PointCloud) -> Result<GeometryId, SceneError> {
        let stride = POINT_VERTEX_LAYOUT.array_stride;
        let bytes = cloud.as_bytes().len();
        check_stride(bytes, stride)?;

        let id = GeometryId(self.allocate("geometry")?);
        self.geometries.insert(
            id,
            GeometryRecord {
                bytes,
                elements: cloud.len(),
                stride,
            },
        );
        Ok(id)
    }

    fn create_material(&mut self, material: &Material) -> Result<MaterialId, SceneError> {
        let id = MaterialId(self.allocate("material")?);
        self.materials.insert(id, *material);
        Ok(id)
    }

    fn add_node(&mut self, kind: NodeKind, parent: Option<NodeId>) -> Result<NodeId, SceneError> {
        if let Some(parent) = parent
            && !self.nodes.contains_key(&parent)
        {
            return Err(SceneError::InvalidParent(parent));
        }
        match kind {
            NodeKind::Mesh { geometry, material } | NodeKind::Points { geometry, material } => {
                if !self.geometries.contains_key(&geometry) {
                    return Err(SceneError::UnknownGeometry(geometry));
                }
                if !self.materials.contains_key(&material) {
                    return Err(SceneError::UnknownMaterial(material));
                }
            }
            NodeKind::Group | NodeKind::PointLight(_) => {}
        }
        let id = NodeId(self.allocate("node")?);
        self.nodes.insert(
            id,
            NodeRecord {
                kind,
                parent,
                transform: Transform::IDENTITY,
                visible: true,
            },
        );
        Ok(id)
    }

    fn set_transform(&mut self, node: NodeId, transform: &Transform) -> Result<(), SceneError> {
        self.node_mut(node)?.transform = *transform;
        Ok(())
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) -> Result<(), SceneError> {
        self.node_mut(node)?.visible = visible;
        Ok(())
    }

    fn set_material_color(
        &mut self,
        material: MaterialId,
        color: Color,
    ) -> Result<(), SceneError> {
        self.material_mut(material)?.color = color;
        Ok(())
    }

    fn set_material_opacity(
        &mut self,
        material: MaterialId,
        opacity: f32,
    ) -> Result<(), SceneError> {
        self.material_mut(material)?.opacity = opacity;
        Ok(())
    }

    fn set_light_intensity(&mut self, node: NodeId, intensity: f32) -> Result<(), SceneError> {
        self.light_mut(node)?.intensity = intensity;
        Ok(())
    }

    fn set_light_color(&mut self, node: NodeId, color: Color) -> Result<(), SceneError> {
        self.light_mut(node)?.color = color;
        Ok(())
    }

    fn remove_node(&mut self, node: NodeId) -> Result<(), SceneError> {
        if !self.nodes.contains_key(&node) {
            self.invalid_releases += 1;
            return Err(SceneError::UnknownNode(node));
        }
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            pending.extend(self.children(id));
            self.nodes.remove(&id);
        }
        Ok(())
    }

    fn dispose_geometry(&mut self, geometry: GeometryId) -> Result<(), SceneError> {
        if self.geometries.remove(&geometry).is_none() {
            self.invalid_releases += 1;
            log::warn!("Release of unknown {geometry}");
            return Err(SceneError::UnknownGeometry(geometry));
        }
        Ok(())
    }

    fn dispose_material(&mut self, material: MaterialId) -> Result<(), SceneError> {
        if self.materials.remove(&material).is_none() {
            self.invalid_releases += 1;
            log::warn!("Release of unknown {material}");
            return Err(SceneError::UnknownMaterial(material));
        }
        Ok(())
    }
}
