use glam::{Mat4, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;
use crate::components::ring::OrbitRing;
use crate::core::transform::LocalTransform;

/// Fat node: one struct with optional components.
/// A node without a mesh is an invisible anchor (e.g. an orbit pivot).
#[derive(Debug, Clone)]
pub struct Node {
    /// Set by the scene on spawn.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Parent in the hierarchy; `None` for roots.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub visible: bool,
    pub local: LocalTransform,
    /// Derived by `Scene::propagate`.
    pub world: Mat4,
    pub mesh: Option<MeshComponent>,
    pub ring: Option<OrbitRing>,
}

impl Node {
    pub fn new() -> Self {
        Self {
            id: NodeId(0),
            tag: String::new(),
            parent: None,
            children: Vec::new(),
            visible: true,
            local: LocalTransform::default(),
            world: Mat4::IDENTITY,
            mesh: None,
            ring: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.local.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.local.rotation = rotation;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_ring(mut self, ring: OrbitRing) -> Self {
        self.ring = Some(ring);
        self
    }

    /// World-space position after the last propagate.
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
