pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext, RenderContext};
pub use api::types::{NodeId, SoundEvent, SoundId, TextureHandle};
pub use error::{AssetError, SceneError};
pub use components::mesh::{Geometry, Material, Mesh, Shading, Side};
pub use components::node::Node;
pub use components::spin::Spin;
pub use core::scene::SceneGraph;
pub use core::time::FrameClock;
pub use core::transform::Transform;
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use renderer::viewport::Viewport;
pub use input::controls::OrbitControls;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, SoundDescriptor, TextureDescriptor};
pub use assets::registry::{AssetRegistry, LoadState};
pub use bridge::frame::{FrameInput, FrameWriter};
pub use bridge::protocol::ProtocolLayout;
pub use systems::audio::{AudioTrigger, TriggerState};
pub use systems::lighting::{AmbientLight, DirectionalLight, Light, LightRig, PointLight};
pub use systems::render::build_render_buffer;
pub use systems::spin::tick_spins;
