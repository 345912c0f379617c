//! Error types for asset loading and scene construction.

use crate::api::types::{NodeId, SoundId, TextureHandle};

/// Errors raised while resolving or loading assets.
///
/// None of these are fatal: a failed asset leaves its material untextured
/// (or its sound silent) and the viewport keeps running.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The host reported a completion for a texture handle we never issued.
    #[error("unknown texture handle {0:?}")]
    UnknownTexture(TextureHandle),

    /// The host reported a completion for a sound id we never issued.
    #[error("unknown sound id {0:?}")]
    UnknownSound(SoundId),

    /// The host failed to fetch or decode an asset.
    #[error("failed to load asset '{name}': {reason}")]
    LoadFailed { name: String, reason: String },

    /// The manifest JSON could not be parsed.
    #[error("failed to parse asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// The manifest could not be fetched.
    #[error("failed to fetch asset manifest: {0}")]
    Fetch(String),
}

/// Errors raised while building scene nodes from invalid descriptions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("orbital distance must be non-negative and finite, got {0}")]
    InvalidOrbitalDistance(f32),

    #[error("ring radii must satisfy 0 <= inner < outer, got inner={inner} outer={outer}")]
    InvalidRing { inner: f32, outer: f32 },

    #[error("node {0:?} does not exist")]
    UnknownNode(NodeId),
}
