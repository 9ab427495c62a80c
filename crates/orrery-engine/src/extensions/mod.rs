pub mod pivot;

pub use pivot::{PivotGraph, PivotTransform};
