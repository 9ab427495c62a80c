pub mod runner;

pub use runner::SimRunner;

/// Generate all `#[wasm_bindgen]` exports for a simulation.
///
/// This macro eliminates the per-simulation boilerplate by generating:
/// - `thread_local!` storage for the SimRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (sim_init, sim_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
/// use orrery_web::SimRunner;
///
/// mod sim;
/// use sim::MySim;
///
/// orrery_web::export_sim!(MySim, "my-sim");
/// ```
///
/// # Arguments
///
/// - `$sim_type`: The simulation struct type that implements `orrery_engine::Sim`
/// - `$sim_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_sim {
    ($sim_type:ty, $sim_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SimRunner<$sim_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SimRunner<$sim_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Sim not initialized. Call sim_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn sim_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let sim = <$sim_type>::new();
            let runner = $crate::SimRunner::new(sim);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $sim_name);
        }

        #[wasm_bindgen]
        pub fn sim_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn sim_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        /// Applied synchronously: the camera projection and output size
        /// are correct for the very next rendered frame.
        #[wasm_bindgen]
        pub fn sim_resize(width: f32, height: f32, pixel_ratio: f32) {
            with_runner(|r| r.resize(width, height, pixel_ratio));
        }

        #[wasm_bindgen]
        pub fn sim_load_registry(json: &str) {
            with_runner(|r| {
                if let Err(e) = r.load_registry(json) {
                    log::error!("{}: registry rejected: {}", $sim_name, e);
                }
            });
        }

        #[wasm_bindgen]
        pub fn sim_registry_json() -> String {
            with_runner(|r| r.registry_json())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_guides_ptr() -> *const f32 {
            with_runner(|r| r.guides_ptr())
        }

        #[wasm_bindgen]
        pub fn get_guide_vertex_count() -> u32 {
            with_runner(|r| r.guide_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_stars_ptr() -> *const f32 {
            with_runner(|r| r.stars_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_count() -> u32 {
            with_runner(|r| r.star_count())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_intensity() -> f32 {
            with_runner(|r| r.ambient_intensity())
        }

        #[wasm_bindgen]
        pub fn get_background_r() -> f32 {
            with_runner(|r| r.background_r())
        }

        #[wasm_bindgen]
        pub fn get_background_g() -> f32 {
            with_runner(|r| r.background_g())
        }

        #[wasm_bindgen]
        pub fn get_background_b() -> f32 {
            with_runner(|r| r.background_b())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies())
        }

        #[wasm_bindgen]
        pub fn get_max_guide_vertices() -> u32 {
            with_runner(|r| r.max_guide_vertices())
        }

        #[wasm_bindgen]
        pub fn get_max_stars() -> u32 {
            with_runner(|r| r.max_stars())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
