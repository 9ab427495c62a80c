pub mod node;
pub mod mesh;
