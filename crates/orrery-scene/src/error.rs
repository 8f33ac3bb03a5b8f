//! Scene-graph error types.

use crate::types::{GeometryId, MaterialId, NodeId};

/// Errors reported by a [`crate::SceneGraph`] implementation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// The engine could not allocate a resource.
    #[error("failed to allocate {resource}: {reason}")]
    AllocationFailed {
        /// Kind of resource ("geometry", "material", "node").
        resource: &'static str,
        /// Engine-provided reason.
        reason: String,
    },

    /// Uploaded geometry does not match its vertex layout or indexes past its vertices.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The node does not exist or was already removed.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The geometry does not exist or was already disposed.
    #[error("unknown geometry {0}")]
    UnknownGeometry(GeometryId),

    /// The material does not exist or was already disposed.
    #[error("unknown material {0}")]
    UnknownMaterial(MaterialId),

    /// A node was attached to a parent that does not exist.
    #[error("invalid parent node {0}")]
    InvalidParent(NodeId),
}
