//! Scene-graph capability: the seam between scene components and the rendering engine.
//!
//! Components never own the engine's graph. They receive a `&mut impl SceneGraph`
//! for the duration of a call, contribute nodes and resources, and hand back
//! ids. [`HeadlessScene`] implements the trait in memory for tests and the
//! windowless demo.

pub mod error;
pub mod graph;
pub mod headless;
pub mod types;

pub use error::SceneError;
pub use graph::SceneGraph;
pub use headless::{HeadlessScene, NodeRecord, SceneStats};
pub use types::{
    Color, GeometryId, Material, MaterialId, MaterialKind, NodeId, NodeKind, PointLight, Side,
    Transform,
};
