use log::warn;
use crate::bridge::protocol::*;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::viewport::Viewport;
use crate::systems::lighting::LightRig;
use crate::api::types::{SoundEvent, TextureHandle};

/// Everything the host needs to draw one frame.
pub struct FrameInput<'a> {
    pub frame: u64,
    pub camera: &'a PerspectiveCamera,
    pub viewport: &'a Viewport,
    pub lights: &'a LightRig,
    pub render_buffer: &'a RenderBuffer,
    pub sounds: &'a [SoundEvent],
    /// Background texture, only when it has finished loading.
    pub background: Option<TextureHandle>,
}

/// Owns the flat frame buffer and serializes a frame into it.
pub struct FrameWriter {
    layout: ProtocolLayout,
    data: Vec<f32>,
}

impl FrameWriter {
    pub fn new(layout: ProtocolLayout) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self { layout, data }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Serialize one frame. Anything beyond the layout's capacities is dropped
    /// with a warning; the header counts always describe what was written.
    pub fn write(&mut self, input: &FrameInput) {
        let layout = &self.layout;
        let data = &mut self.data;
        data[HEADER_LOCK] = 1.0;

        let cam = input.camera.uniform();
        data[layout.camera_offset..layout.light_data_offset]
            .copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&cam)));

        let light_count = input
            .lights
            .write_into(&mut data[layout.light_data_offset..layout.instance_data_offset]);

        let instances = input.render_buffer.as_floats();
        let max_floats = layout.max_instances * INSTANCE_FLOATS;
        if instances.len() > max_floats {
            warn!(
                "{} mesh instances exceed frame capacity {}",
                input.render_buffer.instance_count(),
                layout.max_instances
            );
        }
        let instance_floats = instances.len().min(max_floats);
        data[layout.instance_data_offset..layout.instance_data_offset + instance_floats]
            .copy_from_slice(&instances[..instance_floats]);

        let sound_count = input.sounds.len().min(layout.max_sounds);
        for (slot, sound) in data[layout.sound_data_offset..].iter_mut().zip(&input.sounds[..sound_count]) {
            *slot = sound.0 as f32;
        }

        let ambient = input.lights.ambient();
        data[HEADER_FRAME_COUNTER] = (input.frame % FRAME_COUNTER_WRAP) as f32;
        data[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        data[HEADER_INSTANCE_COUNT] = (instance_floats / INSTANCE_FLOATS) as f32;
        data[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        data[HEADER_LIGHT_COUNT] = light_count as f32;
        data[HEADER_MAX_SOUNDS] = layout.max_sounds as f32;
        data[HEADER_SOUND_COUNT] = sound_count as f32;
        data[HEADER_VIEWPORT_WIDTH] = input.viewport.width;
        data[HEADER_VIEWPORT_HEIGHT] = input.viewport.height;
        data[HEADER_BACKGROUND_TEXTURE] = input.background.map(|t| t.0 as f32).unwrap_or(-1.0);
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_AMBIENT_R] = ambient.color[0];
        data[HEADER_AMBIENT_G] = ambient.color[1];
        data[HEADER_AMBIENT_B] = ambient.color[2];
        data[HEADER_AMBIENT_INTENSITY] = ambient.intensity;

        data[HEADER_LOCK] = 0.0;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
