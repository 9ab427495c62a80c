use glam::Vec3;
use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;

/// Fat Node — a single struct with optional components.
/// Designed for simplicity over ECS purity; a scene here holds a central
/// body, a handful of orbiting meshes, their pivots, and guide anchors.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Whether this node is active (inactive nodes are skipped).
    pub active: bool,
    /// Position in world space. For pivot children this is written by
    /// `PivotGraph::propagate`, never by hand.
    pub pos: Vec3,
    /// Self-rotation angle about the local Y axis, in radians.
    pub spin: f32,
    /// Mesh component (optional — nodes without meshes are invisible,
    /// e.g. pivots).
    pub mesh: Option<MeshComponent>,
    /// Whether the picking ray tests this node.
    pub pickable: bool,
}

impl Node {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            spin: 0.0,
            mesh: None,
            pickable: false,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn pickable(mut self) -> Self {
        self.pickable = true;
        self
    }
}
