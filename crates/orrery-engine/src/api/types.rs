/// Unique identifier for a node in the scene graph.
/// `NodeId(0)` is always the scene root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// Handle to a texture declared in the asset manifest.
/// Dense index, stable for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// Handle to an audio asset declared in the asset manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundId(pub u32);

/// A sound playback request forwarded to the host audio layer.
/// The numeric value is the `SoundId` of the sound to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl From<SoundId> for SoundEvent {
    fn from(id: SoundId) -> Self {
        SoundEvent(id.0)
    }
}
