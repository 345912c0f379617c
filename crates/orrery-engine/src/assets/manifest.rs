use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::error::AssetError;

/// Asset manifest describing the textures and sounds an app needs.
/// Loaded from a JSON file at runtime, or built in code as a fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named textures: name → file.
    #[serde(default)]
    pub textures: BTreeMap<String, TextureDescriptor>,
    /// Named audio assets.
    #[serde(default)]
    pub sounds: BTreeMap<String, SoundDescriptor>,
    /// Texture name drawn behind the scene (e.g. a starfield).
    #[serde(default)]
    pub background: Option<String>,
}

/// Describes a single image texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file (e.g., "img/earth.jpg").
    pub path: String,
}

/// Describes an audio asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Restart from the beginning when playback ends.
    #[serde(default)]
    pub looping: bool,
    /// Playback gain (0.0 = silent, 1.0 = full).
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_volume() -> f32 {
    1.0
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the manifest back to JSON (for the host's asset loader).
    pub fn to_json(&self) -> Result<String, AssetError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_texture(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.textures.insert(name.into(), TextureDescriptor { path: path.into() });
        self
    }

    pub fn with_sound(mut self, name: impl Into<String>, desc: SoundDescriptor) -> Self {
        self.sounds.insert(name.into(), desc);
        self
    }

    pub fn with_background(mut self, name: impl Into<String>) -> Self {
        self.background = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_sounds() {
        let json = r#"{
            "textures": {
                "earth": { "path": "img/earth.jpg" }
            },
            "sounds": {
                "music": { "path": "backgroundmusic.mp3", "looping": true, "volume": 0.5 },
                "click": { "path": "click.mp3" }
            },
            "background": "stars"
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures["earth"].path, "img/earth.jpg");
        assert_eq!(manifest.background.as_deref(), Some("stars"));

        let music = &manifest.sounds["music"];
        assert!(music.looping);
        assert_eq!(music.volume, 0.5);

        let click = &manifest.sounds["click"];
        assert!(!click.looping);
        assert_eq!(click.volume, 1.0);
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
        assert!(manifest.sounds.is_empty());
        assert!(manifest.background.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = AssetManifest::from_json("{ textures: ").unwrap_err();
        assert!(matches!(err, AssetError::Manifest(_)));
    }

    #[test]
    fn json_survives_a_round_trip() {
        let manifest = AssetManifest::new()
            .with_texture("sun", "img/sun.jpg")
            .with_background("sun");
        let parsed = AssetManifest::from_json(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(parsed.textures["sun"].path, "img/sun.jpg");
        assert_eq!(parsed.background.as_deref(), Some("sun"));
    }
}
