use crate::api::types::NodeId;
use crate::components::node::Node;

/// Simple node storage using a flat Vec.
/// Designed for small scenes (dozens of nodes, not millions).
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Remove a node by ID. Returns the removed node if found.
    pub fn despawn(&mut self, id: NodeId) -> Option<Node> {
        if let Some(idx) = self.nodes.iter().position(|n| n.id == id) {
            Some(self.nodes.swap_remove(idx))
        } else {
            None
        }
    }

    /// Get a reference to a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Find the first node with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.tag == tag)
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = NodeId(1);
        scene.spawn(Node::new(id).with_pos(Vec3::new(10.0, 20.0, 30.0)));
        let n = scene.get(id).unwrap();
        assert_eq!(n.pos, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn despawn_removes_node() {
        let mut scene = Scene::new();
        let id = NodeId(1);
        scene.spawn(Node::new(id));
        assert_eq!(scene.len(), 1);
        scene.despawn(id);
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Node::new(NodeId(1)).with_tag("sun"));
        scene.spawn(Node::new(NodeId(2)).with_tag("earth"));
        let sun = scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.id, NodeId(1));
    }
}
