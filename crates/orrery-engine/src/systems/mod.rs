pub mod render;
pub mod picking;
pub mod guides;
pub mod starfield;
pub mod lighting;
