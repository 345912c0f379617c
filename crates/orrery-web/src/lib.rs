pub mod loader;
pub mod runner;

pub use runner::AppRunner;

// Used by `export_app!` expansions in the app crate.
pub use js_sys;

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_init, app_tick, input handlers, asset
///   completions, frame accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod app;
/// use app::MyApp;
///
/// orrery_web::export_app!(MyApp, "my-app");
/// ```
///
/// The app crate must depend on `wasm-bindgen`, `wasm-bindgen-futures`,
/// `log`, `console_log` and `console_error_panic_hook`.
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `orrery_engine::App`
/// - `$app_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        fn report<E: std::fmt::Display>(what: &str, result: Result<(), E>) {
            if let Err(e) = result {
                log::warn!("{}: {}: {}", $app_name, what, e);
            }
        }

        #[wasm_bindgen]
        pub fn app_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::AppRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        #[wasm_bindgen]
        pub fn app_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn app_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn app_pointer_down(x: f32, y: f32, button: u32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_up(x: f32, y: f32, button: u32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn app_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_wheel(delta_y: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
        }

        #[wasm_bindgen]
        pub fn app_click(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::Click { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_touch_start(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::TouchStart { x, y }));
        }

        // ---- Assets ----

        #[wasm_bindgen]
        pub fn app_load_manifest(json: &str) {
            with_runner(|r| report("load_manifest", r.load_manifest(json)));
        }

        /// Fetch `<base_url>/assets.json` and merge it into the registry.
        #[cfg(target_arch = "wasm32")]
        #[wasm_bindgen]
        pub async fn app_fetch_manifest(base_url: String) -> Result<(), JsValue> {
            match $crate::loader::fetch_manifest(&base_url).await {
                Ok(manifest) => {
                    with_runner(|r| r.set_manifest(&manifest));
                    Ok(())
                }
                Err(e) => {
                    // The built-in manifest stays in effect.
                    log::warn!("{}: {}", $app_name, e);
                    Err($crate::js_sys::Error::new(&e.to_string()).into())
                }
            }
        }

        #[wasm_bindgen]
        pub fn app_texture_loaded(handle: u32) {
            with_runner(|r| report("texture_loaded", r.texture_loaded(handle)));
        }

        #[wasm_bindgen]
        pub fn app_texture_failed(handle: u32, reason: &str) {
            with_runner(|r| report("texture_failed", r.texture_failed(handle, reason)));
        }

        #[wasm_bindgen]
        pub fn app_sound_loaded(id: u32) {
            with_runner(|r| report("sound_loaded", r.sound_loaded(id)));
        }

        #[wasm_bindgen]
        pub fn app_sound_failed(id: u32, reason: &str) {
            with_runner(|r| report("sound_failed", r.sound_failed(id, reason)));
        }

        #[wasm_bindgen]
        pub fn get_texture_count() -> u32 {
            with_runner(|r| r.texture_count())
        }

        #[wasm_bindgen]
        pub fn get_texture_path(handle: u32) -> String {
            with_runner(|r| r.texture_path(handle))
        }

        #[wasm_bindgen]
        pub fn get_sound_count() -> u32 {
            with_runner(|r| r.sound_count())
        }

        #[wasm_bindgen]
        pub fn get_sound_path(id: u32) -> String {
            with_runner(|r| r.sound_path(id))
        }

        #[wasm_bindgen]
        pub fn get_sound_looping(id: u32) -> bool {
            with_runner(|r| r.sound_looping(id))
        }

        #[wasm_bindgen]
        pub fn get_sound_volume(id: u32) -> f32 {
            with_runner(|r| r.sound_volume(id))
        }

        // ---- Frame buffer ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len())
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

        #[wasm_bindgen]
        pub fn get_max_sounds() -> u32 {
            with_runner(|r| r.max_sounds())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
