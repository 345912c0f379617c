use glam::Mat4;
use crate::api::types::NodeId;
use crate::components::node::Node;
use crate::error::SceneError;

/// Scene graph: node storage plus parent/child hierarchy.
///
/// Nodes live in a flat slot Vec indexed by `NodeId`; slot 0 is the root.
/// Designed for small node counts (dozens, not millions). World matrices are
/// cached and recomputed top-down by `propagate`.
pub struct SceneGraph {
    slots: Vec<Option<Node>>,
    world: Vec<Mat4>,
    world_visible: Vec<bool>,
    /// Set whenever a node may have moved, cleared by `propagate`.
    dirty: bool,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a graph with room for `capacity` nodes besides the root.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(Some(Node::new().with_tag("root")));
        Self {
            slots,
            world: vec![Mat4::IDENTITY],
            world_visible: vec![true],
            dirty: false,
        }
    }

    /// Add a node under `parent` and return its id.
    ///
    /// Fails if the parent does not exist. The node is part of the next
    /// `propagate`/render pass; no further registration is needed.
    pub fn spawn(&mut self, mut node: Node, parent: NodeId) -> Result<NodeId, SceneError> {
        if self.get(parent).is_none() {
            return Err(SceneError::UnknownNode(parent));
        }

        let id = NodeId(self.slots.len() as u32);
        node.id = id;
        node.parent = Some(parent);
        node.children.clear();
        self.slots.push(Some(node));
        self.world.push(Mat4::IDENTITY);
        self.world_visible.push(true);

        if let Some(parent_node) = self.slot_mut(parent) {
            parent_node.children.push(id);
        }
        self.dirty = true;
        Ok(id)
    }

    /// Remove a node. Its children are re-attached to the root.
    /// The root itself cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        if id == NodeId::ROOT {
            return None;
        }
        let node = self.slots.get_mut(id.0 as usize)?.take()?;

        if let Some(parent) = node.parent {
            if let Some(parent_node) = self.slot_mut(parent) {
                parent_node.children.retain(|&c| c != id);
            }
        }

        for &child in &node.children {
            if let Some(child_node) = self.slot_mut(child) {
                child_node.parent = Some(NodeId::ROOT);
            }
            if let Some(root) = self.slot_mut(NodeId::ROOT) {
                root.children.push(child);
            }
        }

        self.dirty = true;
        Some(node)
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a reference to a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0 as usize).and_then(|s| s.as_ref())
    }

    /// Get a mutable reference to a node by ID.
    /// Marks world transforms stale.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.dirty = true;
        self.slot_mut(id)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0 as usize).and_then(|s| s.as_mut())
    }

    /// Children of a node, in insertion order.
    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.get(id).map(|n| n.children())
    }

    /// Iterate over all live nodes in creation order (root first).
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    /// Iterate over all live nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.dirty = true;
        self.slots.iter_mut().filter_map(|s| s.as_mut())
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.iter().find(|n| n.tag == tag)
    }

    /// Number of live nodes, including the root.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when only the root is present.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Cached world matrix from the last `propagate`.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        self.get(id)?;
        self.world.get(id.0 as usize).copied()
    }

    /// Whether the node and all its ancestors are visible, as of the last `propagate`.
    pub fn is_world_visible(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.world_visible.get(id.0 as usize).copied().unwrap_or(false)
    }

    /// Recompute world matrices and visibility from the root down.
    pub fn propagate(&mut self) {
        if !self.dirty {
            return;
        }
        self.propagate_recursive(NodeId::ROOT, Mat4::IDENTITY, true);
        self.dirty = false;
    }

    fn propagate_recursive(&mut self, id: NodeId, parent_world: Mat4, parent_visible: bool) {
        let Some(node) = self.get(id) else { return };
        let world = parent_world * node.local.matrix();
        let visible = parent_visible && node.visible;
        let children = node.children.clone();

        let idx = id.0 as usize;
        self.world[idx] = world;
        self.world_visible[idx] = visible;

        for child in children {
            self.propagate_recursive(child, world, visible);
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn spawn_and_get() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let id = graph
            .spawn(Node::new().with_tag("probe").with_translation(Vec3::new(10.0, 20.0, 0.0)), root)
            .unwrap();
        let node = graph.get(id).unwrap();
        assert_eq!(node.local.translation, Vec3::new(10.0, 20.0, 0.0));
        assert_eq!(node.parent(), Some(root));
        assert_eq!(graph.children(root), Some([id].as_slice()));
    }

    #[test]
    fn spawn_under_missing_parent_fails() {
        let mut graph = SceneGraph::new();
        let err = graph.spawn(Node::new(), NodeId(42)).unwrap_err();
        assert_eq!(err, SceneError::UnknownNode(NodeId(42)));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn remove_reparents_children_to_root() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let parent = graph.spawn(Node::new(), root).unwrap();
        let child = graph.spawn(Node::new(), parent).unwrap();

        graph.remove(parent);

        assert!(graph.get(parent).is_none());
        assert_eq!(graph.get(child).unwrap().parent(), Some(root));
        assert!(graph.children(root).unwrap().contains(&child));
    }

    #[test]
    fn root_cannot_be_removed() {
        let mut graph = SceneGraph::new();
        assert!(graph.remove(NodeId::ROOT).is_none());
        assert!(graph.get(NodeId::ROOT).is_some());
    }

    #[test]
    fn propagate_carries_child_around_rotated_parent() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let pivot = graph
            .spawn(Node::new().with_rotation(Quat::from_rotation_y(FRAC_PI_2)), root)
            .unwrap();
        let body = graph
            .spawn(Node::new().with_translation(Vec3::new(60.0, 0.0, 0.0)), pivot)
            .unwrap();

        graph.propagate();

        let world = graph.world_matrix(body).unwrap();
        let pos = world.transform_point3(Vec3::ZERO);
        assert!(pos.abs_diff_eq(Vec3::new(0.0, 0.0, -60.0), 1e-3), "pos = {pos}");
        assert!(!graph.is_dirty());
    }

    #[test]
    fn hidden_parent_hides_descendants() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let group = graph.spawn(Node::new(), root).unwrap();
        let leaf = graph.spawn(Node::new(), group).unwrap();

        graph.get_mut(group).unwrap().visible = false;
        graph.propagate();

        assert!(!graph.is_world_visible(group));
        assert!(!graph.is_world_visible(leaf));
    }

    #[test]
    fn find_by_tag() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        graph.spawn(Node::new().with_tag("sun"), root).unwrap();
        let earth = graph.spawn(Node::new().with_tag("earth"), root).unwrap();
        assert_eq!(graph.find_by_tag("earth").unwrap().id(), earth);
        assert!(graph.find_by_tag("vulcan").is_none());
    }
}
