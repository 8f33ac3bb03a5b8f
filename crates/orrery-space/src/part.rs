//! A renderable node together with the geometry and material it owns.

use orrery_mesh::{MeshData, PointCloud};
use orrery_scene::{GeometryId, Material, MaterialId, NodeId, NodeKind, SceneError, SceneGraph};

use crate::warn_on_error;

/// Node plus the engine resources released with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RenderPart {
    pub node: NodeId,
    pub geometry: GeometryId,
    pub material: MaterialId,
}

impl RenderPart {
    /// Upload `mesh`, create `material`, and attach a mesh node under `parent`.
    ///
    /// On failure, whatever was allocated before the failing step is released.
    pub fn mesh(
        scene: &mut dyn SceneGraph,
        mesh: &MeshData,
        material: &Material,
        parent: Option<NodeId>,
    ) -> Result<Self, SceneError> {
        let geometry = scene.create_geometry(mesh)?;
        Self::attach(scene, geometry, material, parent, |geometry, material| {
            NodeKind::Mesh { geometry, material }
        })
    }

    /// Upload `cloud`, create `material`, and attach a points node under `parent`.
    pub fn points(
        scene: &mut dyn SceneGraph,
        cloud: &PointCloud,
        material: &Material,
        parent: Option<NodeId>,
    ) -> Result<Self, SceneError> {
        let geometry = scene.create_point_geometry(cloud)?;
        Self::attach(scene, geometry, material, parent, |geometry, material| {
            NodeKind::Points { geometry, material }
        })
    }

    fn attach(
        scene: &mut dyn SceneGraph,
        geometry: GeometryId,
        material: &Material,
        parent: Option<NodeId>,
        kind: impl FnOnce(GeometryId, MaterialId) -> NodeKind,
    ) -> Result<Self, SceneError> {
        let material = match scene.create_material(material) {
            Ok(material) => material,
            Err(e) => {
                warn_on_error(scene.dispose_geometry(geometry), "release geometry");
                return Err(e);
            }
        };
        match scene.add_node(kind(geometry, material), parent) {
            Ok(node) => Ok(Self {
                node,
                geometry,
                material,
            }),
            Err(e) => {
                warn_on_error(scene.dispose_material(material), "release material");
                warn_on_error(scene.dispose_geometry(geometry), "release geometry");
                Err(e)
            }
        }
    }

    /// Remove the node and release its geometry and material.
    pub fn release(self, scene: &mut dyn SceneGraph) {
        warn_on_error(scene.remove_node(self.node), "remove node");
        warn_on_error(scene.dispose_geometry(self.geometry), "release geometry");
        warn_on_error(scene.dispose_material(self.material), "release material");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_mesh::sphere;
    use orrery_scene::{Color, HeadlessScene};

    #[test]
    fn test_failed_node_allocation_releases_resources() {
        let mut scene = HeadlessScene::new();
        scene.fail_after_allocations(2);
        let result = RenderPart::mesh(
            &mut scene,
            &sphere(1.0, 8, 4),
            &Material::basic(Color::WHITE),
            None,
        );
        assert!(result.is_err());
        let stats = scene.stats();
        assert_eq!((stats.nodes, stats.geometries, stats.materials), (0, 0, 0));
        assert_eq!(stats.invalid_releases, 0);
    }

    #[test]
    fn test_release_frees_everything() {
        let mut scene = HeadlessScene::new();
        let part = RenderPart::points(
            &mut scene,
            &PointCloud::default(),
            &Material::basic(Color::WHITE),
            None,
        )
        .unwrap();
        part.release(&mut scene);
        let stats = scene.stats();
        assert_eq!((stats.nodes, stats.geometries, stats.materials), (0, 0, 0));
        assert_eq!(stats.invalid_releases, 0);
    }
}
