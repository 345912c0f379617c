use crate::api::types::{SoundEvent, TextureHandle};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::AssetRegistry;
use crate::core::scene::SceneGraph;
use crate::input::controls::OrbitControls;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::viewport::{self, Viewport};
use crate::systems::lighting::LightRig;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Initial viewport width in CSS pixels (the host sends the real size on start).
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of mesh instances per frame (default: 64).
    pub max_instances: usize,
    /// Maximum number of lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of sound events per frame (default: 8).
    pub max_sounds: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_instances: 64,
            max_lights: 8,
            max_sounds: 8,
        }
    }
}

/// The contract every app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Assets the app needs. Registered before `init` so handles can be
    /// looked up while building the scene; the host may later replace it.
    fn manifest(&self) -> AssetManifest {
        AssetManifest::default()
    }

    /// Build the scene, lights and camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame logic. Runs after the controls have consumed this frame's
    /// input and before the spin step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct EngineContext {
    pub scene: SceneGraph,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
    pub lights: LightRig,
    pub assets: AssetRegistry,
    /// Texture drawn behind the scene.
    pub background: Option<TextureHandle>,
    pub sounds: Vec<SoundEvent>,
}

impl EngineContext {
    pub fn new(config: &AppConfig) -> Self {
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        let camera = PerspectiveCamera::new(45.0, viewport.aspect(), 0.1, 1000.0);
        let controls = OrbitControls::from_camera(&camera);
        Self {
            scene: SceneGraph::new(),
            camera,
            controls,
            viewport,
            lights: LightRig::new(),
            assets: AssetRegistry::new(),
            background: None,
            sounds: Vec::with_capacity(config.max_sounds),
        }
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    pub fn set_background(&mut self, texture: Option<TextureHandle>) {
        self.background = texture;
    }

    /// Background handle the renderer may sample this frame.
    pub fn background_for_render(&self) -> Option<TextureHandle> {
        self.background.and_then(|t| self.assets.texture_for_render(t))
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
    }

    /// Fit the camera and viewport to a new output size.
    pub fn resize(&mut self, width: f32, height: f32) {
        viewport::resize(&mut self.camera, &mut self.viewport, width, height);
    }

    /// Feed pending input to the orbit controls and apply the result to the camera.
    pub fn apply_input(&mut self, input: &InputQueue) {
        let mut moved = false;
        for event in input.iter() {
            moved |= self.controls.handle(event, &self.viewport);
        }
        if moved {
            self.controls.update(&mut self.camera);
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::AssetManifest;
    use crate::input::queue::{InputEvent, BUTTON_PRIMARY};
    use glam::Vec3;

    #[test]
    fn context_starts_from_config() {
        let config = AppConfig { viewport_width: 1000.0, viewport_height: 500.0, ..Default::default() };
        let ctx = EngineContext::new(&config);
        assert_eq!(ctx.viewport, Viewport::new(1000.0, 500.0));
        assert!((ctx.camera.aspect - 2.0).abs() < 1e-6);
        assert!(ctx.sounds.is_empty());
    }

    #[test]
    fn input_moves_camera_not_target() {
        let mut ctx = EngineContext::default();
        ctx.camera.look_at(Vec3::new(-90.0, 140.0, 140.0), Vec3::ZERO);
        ctx.controls = OrbitControls::from_camera(&ctx.camera);
        let before = ctx.camera.position;

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 10.0, y: 10.0, button: BUTTON_PRIMARY });
        input.push(InputEvent::PointerMove { x: 60.0, y: 30.0 });
        ctx.apply_input(&input);

        assert_ne!(ctx.camera.position, before);
        assert_eq!(ctx.camera.target, Vec3::ZERO);
        assert!((ctx.camera.distance() - before.length()).abs() < 1e-2);
    }

    #[test]
    fn background_waits_for_its_texture() {
        let mut ctx = EngineContext::default();
        ctx.assets = AssetRegistry::from_manifest(&AssetManifest::new().with_texture("stars", "img/stars.jpg"));
        let stars = ctx.assets.texture("stars");
        ctx.set_background(stars);
        assert_eq!(ctx.background_for_render(), None);

        ctx.assets.texture_loaded(stars.unwrap()).unwrap();
        assert_eq!(ctx.background_for_render(), stars);
    }

    #[test]
    fn clear_frame_data_drops_sounds() {
        let mut ctx = EngineContext::default();
        ctx.emit_sound(SoundEvent(0));
        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
    }
}
