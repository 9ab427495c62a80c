pub mod scene;
pub mod clock;
pub mod rng;
