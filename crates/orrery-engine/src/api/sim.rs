use crate::api::types::{NodeId, UiEvent};
use crate::assets::registry::BodyRegistry;
use crate::core::scene::Scene;
use crate::renderer::camera::Camera3D;
use crate::systems::guides::GuideState;
use crate::systems::lighting::LightState;
use crate::systems::starfield::StarVertex;

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Maximum number of body render instances (default: 64).
    pub max_bodies: usize,
    /// Maximum number of guide-curve vertices (default: 4096).
    pub max_guide_vertices: usize,
    /// Maximum number of star vertices (default: 16384).
    pub max_stars: usize,
    /// Maximum number of UI events per frame (default: 32).
    pub max_events: usize,
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_deg: f32,
    /// Near clip plane (default: 0.1).
    pub z_near: f32,
    /// Far clip plane (default: 1000).
    pub z_far: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_bodies: 64,
            max_guide_vertices: 4096,
            max_stars: 16384,
            max_events: 32,
            fov_y_deg: 75.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Sim {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Setup initial state: spawn nodes, build guides and the starfield,
    /// position the camera.
    fn init(&mut self, ctx: &mut SimContext);

    /// The per-frame tick. Drains input, advances the simulation, emits
    /// UI events. `dt` is the wall-clock frame delta in seconds.
    fn update(&mut self, ctx: &mut SimContext, input: &crate::input::queue::InputQueue, dt: f32);
}

/// Mutable access to engine state, passed to Sim::init and Sim::update.
pub struct SimContext {
    pub scene: Scene,
    pub guides: GuideState,
    pub lights: LightState,
    pub camera: Camera3D,
    /// Static star vertices, generated once at init.
    pub stars: Vec<StarVertex>,
    /// Body registry the scene was built from. The host reads it back as
    /// JSON to generate the slider UI.
    pub registry: BodyRegistry,
    pub events: Vec<UiEvent>,
    next_id: u32,
}

impl SimContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            guides: GuideState::new(),
            lights: LightState::new(),
            camera: Camera3D::new(75.0, 0.1, 1000.0),
            stars: Vec::new(),
            registry: BodyRegistry::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a UI event to be forwarded to the host.
    pub fn emit_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, guide vertices).
    /// Guides are redrawn by the simulation every frame; stars are not.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.guides.clear();
    }

    /// Reset everything built by `Sim::init`, keeping the registry.
    /// Used when the host swaps in a new registry at runtime.
    pub fn reset_scene(&mut self) {
        self.scene.clear();
        self.guides.clear();
        self.stars.clear();
        self.events.clear();
        self.next_id = 1;
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique_and_monotonic() {
        let mut ctx = SimContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn clear_frame_data_keeps_stars() {
        let mut ctx = SimContext::new();
        ctx.stars.push(crate::systems::starfield::StarVertex::new(1.0, 2.0, 3.0));
        ctx.emit_event(UiEvent { kind: 1.0, a: 0.0, b: 0.0, c: 0.0 });
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
        assert_eq!(ctx.stars.len(), 1);
    }
}
