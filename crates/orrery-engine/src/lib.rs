pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::sim::{Sim, SimConfig, SimContext};
pub use api::types::{NodeId, UiEvent};
pub use components::node::Node;
pub use components::mesh::{MeshComponent, MeshShape, MeshColor};
pub use core::scene::Scene;
pub use core::clock::SimClock;
pub use core::rng::Rng;
pub use renderer::instance::{BodyInstance, BodyBuffer};
pub use renderer::camera::{Camera3D, Ray};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::registry::{BodyDescriptor, BodyRegistry, RegistryError};
pub use bridge::protocol::ProtocolLayout;
pub use systems::guides::{GuideState, GuideVertex};
pub use systems::starfield::{StarVertex, StarfieldConfig, generate_starfield};
pub use systems::lighting::{PointLight, LightState};
pub use systems::picking::{pick_nearest, ray_sphere};
pub use systems::render::build_body_buffer;
pub use extensions::pivot::{PivotGraph, PivotTransform};
