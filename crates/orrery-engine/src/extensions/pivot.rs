// extensions/pivot.rs
//
// Pivot hierarchy extension — tracks parent-child relationships by NodeId.
// A pivot is an invisible anchor whose rotation about the Y axis, applied
// before a child's fixed offset, produces circular motion of that child
// around the anchor's origin. Completely decoupled from Node/Scene
// internals.
//
// Usage:
//   let mut graph = PivotGraph::new();
//   graph.register_with(mesh_id, PivotTransform::new().with_offset(Vec3::new(d, 0.0, 0.0)));
//   graph.set_parent(mesh_id, Some(pivot_id));
//   graph.set_angle(pivot_id, theta);
//   graph.propagate(&mut scene);  // Updates world positions from local offsets

use std::collections::HashMap;
use glam::{Quat, Vec3};
use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// Local transform data for nodes in a pivot hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct PivotTransform {
    /// Position relative to parent (or world if no parent). For orbiting
    /// meshes this is the orbital distance along local X, fixed at
    /// construction and never mutated afterwards.
    pub offset: Vec3,
    /// Rotation about the Y axis relative to parent, in radians.
    pub angle: f32,
}

impl Default for PivotTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            angle: 0.0,
        }
    }
}

impl PivotTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

/// Node in the pivot hierarchy.
#[derive(Debug, Clone, Default)]
struct PivotNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: PivotTransform,
}

/// Pivot hierarchy graph — manages parent-child relationships.
///
/// Exists separately from Scene to keep the scene storage flat.
/// Simulations that need pivots create this alongside their Scene.
#[derive(Debug, Default)]
pub struct PivotGraph {
    nodes: HashMap<NodeId, PivotNode>,
    /// Nodes with no parent (top-level).
    roots: Vec<NodeId>,
    /// Dirty flag — set when an angle or the hierarchy changes, cleared
    /// after propagate.
    dirty: bool,
}

impl PivotGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node in the hierarchy with default local transform.
    pub fn register(&mut self, id: NodeId) {
        self.nodes.entry(id).or_default();
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Register a node with a specific local transform.
    pub fn register_with(&mut self, id: NodeId, local: PivotTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of a node. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
            self.roots.retain(|&r| r != child);
        } else if !self.roots.contains(&child) {
            self.roots.push(child);
        }

        self.dirty = true;
    }

    /// Set a pivot's rotation angle. This is the only per-frame mutation:
    /// offsets stay fixed, so a child at offset length d always moves on a
    /// circle of radius d.
    pub fn set_angle(&mut self, id: NodeId, angle: f32) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local.angle = angle;
            self.dirty = true;
        }
    }

    /// Get a pivot's current rotation angle.
    pub fn angle(&self, id: NodeId) -> Option<f32> {
        self.nodes.get(&id).map(|n| n.local.angle)
    }

    /// Get the local transform for a node.
    pub fn get_local(&self, id: NodeId) -> Option<&PivotTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the parent of a node.
    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of a node.
    pub fn get_children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    /// Propagate transforms from roots down through the hierarchy,
    /// updating `Node.pos` from parent rotations and local offsets.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }

        let roots: Vec<NodeId> = self.roots.clone();
        for root in roots {
            self.propagate_recursive(root, Vec3::ZERO, 0.0, scene);
        }

        self.dirty = false;
    }

    fn propagate_recursive(
        &self,
        id: NodeId,
        parent_pos: Vec3,
        parent_angle: f32,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = &node.local;

        // Rotate the offset about Y by the parent angle, then translate
        let rotated_offset = Quat::from_rotation_y(parent_angle) * local.offset;
        let world_pos = parent_pos + rotated_offset;
        let world_angle = parent_angle + local.angle;

        if let Some(scene_node) = scene.get_mut(id) {
            scene_node.pos = world_pos;
        }

        let children: Vec<NodeId> = node.children.clone();
        for child in children {
            self.propagate_recursive(child, world_pos, world_angle, scene);
        }
    }

    /// Check if the hierarchy has pending changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of nodes in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all hierarchy data.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::node::Node;

    #[test]
    fn parent_child_relationship() {
        let mut graph = PivotGraph::new();
        let pivot = NodeId(1);
        let mesh = NodeId(2);

        graph.register(pivot);
        graph.register(mesh);
        graph.set_parent(mesh, Some(pivot));

        assert_eq!(graph.get_parent(mesh), Some(pivot));
        assert_eq!(graph.get_children(pivot), Some([mesh].as_slice()));
    }

    #[test]
    fn rotated_pivot_moves_child_on_circle() {
        let mut graph = PivotGraph::new();
        let mut scene = Scene::new();

        let pivot = NodeId(1);
        let mesh = NodeId(2);
        let d = 42.0;

        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(mesh));

        graph.register(pivot);
        graph.register_with(mesh, PivotTransform::new().with_offset(Vec3::new(d, 0.0, 0.0)));
        graph.set_parent(mesh, Some(pivot));

        let theta = std::f32::consts::FRAC_PI_3;
        graph.set_angle(pivot, theta);
        graph.propagate(&mut scene);

        let pos = scene.get(mesh).unwrap().pos;
        assert!((pos.x - d * theta.cos()).abs() < 1e-4);
        assert!(pos.y.abs() < 1e-4);
        assert!((pos.z - -d * theta.sin()).abs() < 1e-4);
        // Radius is preserved exactly: the offset itself never changed
        assert!((pos.length() - d).abs() < 1e-3);
    }

    #[test]
    fn quarter_turn_lands_on_negative_z() {
        let mut graph = PivotGraph::new();
        let mut scene = Scene::new();

        let pivot = NodeId(1);
        let mesh = NodeId(2);
        scene.spawn(Node::new(pivot));
        scene.spawn(Node::new(mesh));
        graph.register(pivot);
        graph.register_with(mesh, PivotTransform::new().with_offset(Vec3::new(10.0, 0.0, 0.0)));
        graph.set_parent(mesh, Some(pivot));

        graph.set_angle(pivot, std::f32::consts::FRAC_PI_2);
        graph.propagate(&mut scene);

        let pos = scene.get(mesh).unwrap().pos;
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.z + 10.0).abs() < 1e-4);
    }

    #[test]
    fn propagate_is_skipped_when_clean() {
        let mut graph = PivotGraph::new();
        let mut scene = Scene::new();
        let pivot = NodeId(1);
        scene.spawn(Node::new(pivot));
        graph.register(pivot);

        graph.propagate(&mut scene);
        assert!(!graph.is_dirty());

        graph.set_angle(pivot, 1.0);
        assert!(graph.is_dirty());
    }
}
