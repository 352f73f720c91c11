pub mod runner;

pub use runner::{SharedFrameBuffer, WebRunner};
pub use js_sys;

/// Route panics and `log` output to the browser console. Safe to call twice.
pub fn init_host_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Build a JS array of `[id, path]` pairs for the host texture loader.
pub fn texture_requests(pending: &[(u32, String)]) -> js_sys::Array {
    pending
        .iter()
        .map(|(id, path)| {
            let pair = js_sys::Array::new();
            pair.push(&(*id).into());
            pair.push(&path.as_str().into());
            pair
        })
        .collect()
}

/// Generate all `#[wasm_bindgen]` exports for a scenario.
///
/// Generates:
/// - `thread_local!` storage for the WebRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (orrery_init, orrery_tick, input handlers,
///   texture handshake, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod scene;
/// use scene::MyScene;
///
/// orrery_web::export_scenario!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$scenario_type`: A type implementing `orrery_engine::Scenario` and `Default`
/// - `$scenario_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_scenario {
    ($scenario_type:ty, $scenario_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::WebRunner<$scenario_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::WebRunner<$scenario_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call orrery_init() first.");
                f(runner)
            })
        }

        /// Compose the scene for a `width` x `height` surface. `config_json`
        /// overrides scene settings; invalid settings are logged and the
        /// defaults are kept.
        #[wasm_bindgen]
        pub fn orrery_init(width: u32, height: u32, config_json: Option<String>) {
            $crate::init_host_logging(log::Level::Info);

            let mut runner = $crate::WebRunner::new(<$scenario_type>::default());
            if let Some(json) = config_json.as_deref() {
                if let Err(err) = runner.configure(json) {
                    log::error!("{}: bad config, using defaults: {}", $scenario_name, err);
                    runner = $crate::WebRunner::new(<$scenario_type>::default());
                }
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init(width, height));
            log::info!("{}: initialized", $scenario_name);
        }

        /// Advance one frame. The host re-schedules while this returns true.
        #[wasm_bindgen]
        pub fn orrery_tick() -> bool {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => runner.tick(),
                None => false,
            })
        }

        #[wasm_bindgen]
        pub fn orrery_stop() {
            with_runner(|r| r.stop());
        }

        #[wasm_bindgen]
        pub fn orrery_resize(width: u32, height: u32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn orrery_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn orrery_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn orrery_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn orrery_wheel(delta_y: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
        }

        // ---- Texture handshake ----

        #[wasm_bindgen]
        pub fn orrery_texture_count() -> u32 {
            with_runner(|r| r.texture_count())
        }

        #[wasm_bindgen]
        pub fn orrery_texture_path(id: u32) -> Option<String> {
            with_runner(|r| r.texture_path(id))
        }

        /// `[id, path]` pairs the host still has to fetch.
        #[wasm_bindgen]
        pub fn orrery_pending_textures() -> $crate::js_sys::Array {
            with_runner(|r| $crate::texture_requests(&r.pending_textures()))
        }

        #[wasm_bindgen]
        pub fn orrery_texture_loaded(id: u32, ok: bool) {
            with_runner(|r| r.texture_loaded(id, ok));
        }

        // ---- Shared buffer accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_camera_offset() -> u32 {
            with_runner(|r| r.camera_offset())
        }

        #[wasm_bindgen]
        pub fn get_instance_data_offset() -> u32 {
            with_runner(|r| r.instance_data_offset())
        }

        #[wasm_bindgen]
        pub fn get_light_data_offset() -> u32 {
            with_runner(|r| r.light_data_offset())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }
    };
}
