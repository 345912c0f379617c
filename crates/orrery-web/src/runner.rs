use orrery_engine::{
    App, AppConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer,
    FrameClock, FrameInput, FrameWriter, ProtocolLayout,
    AssetError, AssetManifest, SoundId, TextureHandle,
};
use orrery_engine::systems::render::build_render_buffer;
use orrery_engine::systems::spin::tick_spins;

/// Generic app runner that wires up the engine loop.
///
/// Each concrete app (e.g., `solar-system`) creates a `thread_local!` AppRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    config: AppConfig,
    frame: FrameWriter,
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            app,
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            clock: FrameClock::new(),
            frame: FrameWriter::new(layout),
            config,
            initialized: false,
        }
    }

    /// Register the app's assets and build its scene. Call once after construction.
    pub fn init(&mut self) {
        let manifest = self.app.manifest();
        self.set_manifest(&manifest);
        self.app.init(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "scene ready: {} nodes, {} lights, {} textures pending",
            self.ctx.scene.len(),
            self.ctx.lights.count(),
            self.ctx.assets.texture_count()
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: controls, app update, one spin step, one render build.
    /// The host delta is ignored; spins advance a fixed step per call.
    pub fn tick(&mut self, _dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        let frame = self.clock.advance();

        self.ctx.apply_input(&self.input);
        self.app.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        tick_spins(&mut self.ctx.scene);

        build_render_buffer(&mut self.ctx.scene, &self.ctx.assets, &mut self.render_buffer);

        // Allow app to add custom render commands
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.app.render(&mut render_ctx);
        }

        self.frame.write(&FrameInput {
            frame,
            camera: &self.ctx.camera,
            viewport: &self.ctx.viewport,
            lights: &self.ctx.lights,
            render_buffer: &self.render_buffer,
            sounds: &self.ctx.sounds,
            background: self.ctx.background_for_render(),
        });
    }

    /// Fit camera and viewport to the host's output size. Applied immediately.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.resize(width, height);
    }

    // ---- Assets ----

    /// Merge a manifest fetched by the host. Existing handles stay valid.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), AssetError> {
        let manifest = AssetManifest::from_json(json)?;
        self.set_manifest(&manifest);
        Ok(())
    }

    pub fn set_manifest(&mut self, manifest: &AssetManifest) {
        self.ctx.assets.apply_manifest(manifest);
        if let Some(name) = self.ctx.assets.background() {
            let background = self.ctx.assets.texture(name);
            self.ctx.set_background(background);
        }
        log::info!(
            "asset manifest loaded: {} textures, {} sounds",
            self.ctx.assets.texture_count(),
            self.ctx.assets.sound_count()
        );
    }

    pub fn texture_loaded(&mut self, handle: u32) -> Result<(), AssetError> {
        self.ctx.assets.texture_loaded(TextureHandle(handle))
    }

    pub fn texture_failed(&mut self, handle: u32, reason: &str) -> Result<(), AssetError> {
        self.ctx.assets.texture_failed(TextureHandle(handle), reason)
    }

    pub fn sound_loaded(&mut self, id: u32) -> Result<(), AssetError> {
        self.ctx.assets.sound_loaded(SoundId(id))
    }

    pub fn sound_failed(&mut self, id: u32, reason: &str) -> Result<(), AssetError> {
        self.ctx.assets.sound_failed(SoundId(id), reason)
    }

    pub fn texture_count(&self) -> u32 {
        self.ctx.assets.texture_count() as u32
    }

    /// Path the host should fetch for a texture handle ("" if unknown).
    pub fn texture_path(&self, handle: u32) -> String {
        self.ctx
            .assets
            .texture_path(TextureHandle(handle))
            .unwrap_or_default()
            .to_string()
    }

    pub fn sound_count(&self) -> u32 {
        self.ctx.assets.sound_count() as u32
    }

    pub fn sound_path(&self, id: u32) -> String {
        self.ctx.assets.sound_path(SoundId(id)).unwrap_or_default().to_string()
    }

    pub fn sound_looping(&self, id: u32) -> bool {
        self.ctx.assets.sound_entry(SoundId(id)).is_some_and(|s| s.looping)
    }

    pub fn sound_volume(&self, id: u32) -> f32 {
        self.ctx.assets.sound_entry(SoundId(id)).map_or(1.0, |s| s.volume)
    }

    // ---- Pointer accessors for frame buffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn frame_slice(&self) -> &[f32] {
        self.frame.as_slice()
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.config.max_lights as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.config.max_sounds as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.frame.layout().buffer_total_floats as u32
    }
}
