use orrery_engine::{
    Sim, SimConfig, SimContext,
    InputEvent, InputQueue, BodyBuffer, ProtocolLayout,
};
use orrery_engine::renderer::camera::CameraUniform;
use orrery_engine::systems::render::build_body_buffer;

/// Generic simulation runner that wires up the engine loop.
///
/// Each concrete simulation creates a `thread_local!` SimRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct SimRunner<S: Sim> {
    sim: S,
    ctx: SimContext,
    input: InputQueue,
    body_buffer: BodyBuffer,
    camera_uniform: CameraUniform,
    config: SimConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<S: Sim> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        let layout = ProtocolLayout::from_config(&config);
        let body_buffer = BodyBuffer::with_capacity(config.max_bodies);

        let mut ctx = SimContext::new();
        ctx.camera = orrery_engine::Camera3D::new(config.fov_y_deg, config.z_near, config.z_far);
        let camera_uniform = ctx.camera.uniform();

        Self {
            sim,
            ctx,
            input: InputQueue::new(),
            body_buffer,
            camera_uniform,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the simulation. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.sim.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.sim.init(&mut self.ctx);
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Resize the camera viewport. Applied synchronously, outside the
    /// input queue, so the very next frame renders at the new aspect.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.ctx.camera.resize(width, height, pixel_ratio);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    /// Replace the body registry from host-supplied JSON and rebuild the
    /// scene. Returns an error string suitable for logging.
    pub fn load_registry(&mut self, json: &str) -> Result<(), String> {
        let registry = orrery_engine::BodyRegistry::from_json(json).map_err(|e| e.to_string())?;
        self.ctx.registry = registry;
        if self.initialized {
            self.ctx.reset_scene();
            self.sim.init(&mut self.ctx);
        }
        Ok(())
    }

    /// Serialize the current registry so the host can build its UI.
    pub fn registry_json(&self) -> String {
        self.ctx.registry.to_json()
    }

    /// Run one frame tick: update the simulation, rebuild render data.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data (events, guide vertices)
        self.ctx.clear_frame_data();

        self.sim.update(&mut self.ctx, &self.input, dt);

        // Drain input after update
        self.input.drain();

        // Build render data from the scene
        build_body_buffer(self.ctx.scene.iter(), &mut self.body_buffer);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.body_buffer.as_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.body_buffer.count()
    }

    pub fn guides_ptr(&self) -> *const f32 {
        self.ctx.guides.as_ptr()
    }

    pub fn guide_vertex_count(&self) -> u32 {
        self.ctx.guides.vertex_count()
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.as_ptr() as *const f32
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    /// Column-major view-projection matrix, 16 floats.
    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    // ---- Theme / lighting accessors ----

    pub fn ambient_intensity(&self) -> f32 {
        self.ctx.lights.ambient_intensity()
    }

    pub fn background_r(&self) -> f32 {
        self.ctx.lights.background()[0]
    }

    pub fn background_g(&self) -> f32 {
        self.ctx.lights.background()[1]
    }

    pub fn background_b(&self) -> f32 {
        self.ctx.lights.background()[2]
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    // ---- Capacity accessors (read by TypeScript at startup) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_guide_vertices(&self) -> u32 {
        self.layout.max_guide_vertices as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
