//! Frame buffer layout.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 36 floats]             view (16), projection (16), eye position (4)
//! [Lights: max_lights × 12 floats]
//! [Instances: max_instances × 24 floats]
//! [Sounds: max_sounds × 1 float]
//! ```
//!
//! Capacities are written into the header every frame.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::app::AppConfig;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::MeshInstance;
use crate::systems::lighting::Light;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LIGHTS: usize = 4;
pub const HEADER_LIGHT_COUNT: usize = 5;
pub const HEADER_MAX_SOUNDS: usize = 6;
pub const HEADER_SOUND_COUNT: usize = 7;
pub const HEADER_VIEWPORT_WIDTH: usize = 8;
pub const HEADER_VIEWPORT_HEIGHT: usize = 9;
/// Background texture handle, or -1 while it is not ready.
pub const HEADER_BACKGROUND_TEXTURE: usize = 10;
pub const HEADER_PROTOCOL_VERSION: usize = 11;
pub const HEADER_AMBIENT_R: usize = 12;
pub const HEADER_AMBIENT_G: usize = 13;
pub const HEADER_AMBIENT_B: usize = 14;
pub const HEADER_AMBIENT_INTENSITY: usize = 15;

/// The header frame counter wraps here: past 2^24 an f32 can no longer
/// represent consecutive integers.
pub const FRAME_COUNTER_WRAP: u64 = 1 << 24;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera block (wire format, never changes).
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats per light (wire format, never changes).
pub const LIGHT_FLOATS: usize = Light::FLOATS;

/// Floats per mesh instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = MeshInstance::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_lights: usize,
    pub max_instances: usize,
    /// Maximum sound events per frame.
    pub max_sounds: usize,

    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_lights: usize, max_instances: usize, max_sounds: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let light_data_offset = camera_offset + CAMERA_FLOATS;
        let instance_data_offset = light_data_offset + max_lights * LIGHT_FLOATS;
        let sound_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let buffer_total_floats = sound_data_offset + max_sounds;

        Self {
            max_lights,
            max_instances,
            max_sounds,
            camera_offset,
            light_data_offset,
            instance_data_offset,
            sound_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_lights, config.max_instances, config.max_sounds)
    }
}

impl Default for ProtocolLayout {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_section_order() {
        let layout = ProtocolLayout::new(8, 64, 8);
        assert_eq!(layout.camera_offset, 16);
        assert_eq!(layout.light_data_offset, 16 + 36);
        assert_eq!(layout.instance_data_offset, 52 + 8 * 12);
        assert_eq!(layout.sound_data_offset, 148 + 64 * 24);
        assert_eq!(layout.buffer_total_floats, 1684 + 8);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn zero_capacities_leave_header_and_camera() {
        let layout = ProtocolLayout::new(0, 0, 0);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + CAMERA_FLOATS);
    }

    #[test]
    fn header_indices_fit() {
        assert!(HEADER_AMBIENT_INTENSITY < HEADER_FLOATS);
    }

    #[test]
    fn wrapped_counter_is_exact_in_f32() {
        let last = (FRAME_COUNTER_WRAP - 1) as f32;
        assert_ne!(last, (FRAME_COUNTER_WRAP - 2) as f32);
        assert_eq!(last as u64, FRAME_COUNTER_WRAP - 1);
    }
}
