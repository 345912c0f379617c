use glam::{Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::Mesh;
use crate::components::spin::Spin;
use crate::core::transform::Transform;

/// Scene graph node: a transform with optional components.
///
/// A node without a mesh is an invisible group. Groups are how orbits work:
/// rotate a group at the origin and every child offset from it revolves.
#[derive(Debug, Clone)]
pub struct Node {
    /// Assigned by `SceneGraph::spawn`.
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Hidden nodes (and their descendants) are skipped when rendering.
    pub visible: bool,
    /// Transform relative to the parent.
    pub local: Transform,
    /// Renderable geometry and material (groups have none).
    pub mesh: Option<Mesh>,
    /// Per-frame rotation (optional).
    pub spin: Option<Spin>,
}

impl Node {
    /// Create an empty group node at the parent's origin.
    pub fn new() -> Self {
        Self {
            id: NodeId::ROOT,
            parent: None,
            children: Vec::new(),
            tag: String::new(),
            visible: true,
            local: Transform::default(),
            mesh: None,
            spin: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
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

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.local.rotation = rotation;
        self
    }

    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = Some(spin);
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
