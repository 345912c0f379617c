use log::{debug, warn};
use crate::api::types::{SoundId, TextureHandle};
use crate::assets::manifest::AssetManifest;
use crate::error::AssetError;

/// Progress of one asynchronously loaded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Requested from the host, no completion yet.
    Pending,
    /// Decoded and usable by the renderer/audio layer.
    Ready,
    /// The host gave up on it; the reason is kept for diagnostics.
    Failed(String),
}

#[derive(Debug, Clone)]
struct TextureEntry {
    name: String,
    path: String,
    state: LoadState,
}

/// A registered sound with its playback settings.
#[derive(Debug, Clone)]
pub struct SoundEntry {
    pub name: String,
    pub path: String,
    pub looping: bool,
    pub volume: f32,
    pub state: LoadState,
}

/// Registry of named textures and sounds, built from an `AssetManifest`.
///
/// Handles are dense indices assigned in name order and never change once
/// issued, so materials created before a manifest reload keep pointing at the
/// same asset. Loading itself happens in the host; the registry only records
/// the completions the host reports back.
pub struct AssetRegistry {
    textures: Vec<TextureEntry>,
    sounds: Vec<SoundEntry>,
    background: Option<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            sounds: Vec::new(),
            background: None,
        }
    }

    /// Build a registry from a parsed AssetManifest. Every asset starts `Pending`.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut registry = Self::new();
        registry.apply_manifest(manifest);
        registry
    }

    /// Merge a (possibly newer) manifest into the registry.
    ///
    /// Names already known keep their handle and go back to `Pending` with the
    /// new path; unseen names are appended. Names missing from the new
    /// manifest keep their slot so outstanding handles stay valid.
    pub fn apply_manifest(&mut self, manifest: &AssetManifest) {
        for (name, desc) in &manifest.textures {
            match self.textures.iter_mut().find(|t| t.name == *name) {
                Some(entry) => {
                    entry.path = desc.path.clone();
                    entry.state = LoadState::Pending;
                }
                None => self.textures.push(TextureEntry {
                    name: name.clone(),
                    path: desc.path.clone(),
                    state: LoadState::Pending,
                }),
            }
        }

        for (name, desc) in &manifest.sounds {
            let entry = SoundEntry {
                name: name.clone(),
                path: desc.path.clone(),
                looping: desc.looping,
                volume: desc.volume,
                state: LoadState::Pending,
            };
            match self.sounds.iter_mut().find(|s| s.name == *name) {
                Some(existing) => *existing = entry,
                None => self.sounds.push(entry),
            }
        }

        if manifest.background.is_some() {
            self.background = manifest.background.clone();
        }

        debug!(
            "asset registry: {} textures, {} sounds",
            self.textures.len(),
            self.sounds.len()
        );
    }

    /// Look up a texture handle by name.
    pub fn texture(&self, name: &str) -> Option<TextureHandle> {
        self.textures
            .iter()
            .position(|t| t.name == name)
            .map(|i| TextureHandle(i as u32))
    }

    /// Look up a sound id by name.
    pub fn sound(&self, name: &str) -> Option<SoundId> {
        self.sounds
            .iter()
            .position(|s| s.name == name)
            .map(|i| SoundId(i as u32))
    }

    pub fn texture_state(&self, handle: TextureHandle) -> Option<&LoadState> {
        self.textures.get(handle.0 as usize).map(|t| &t.state)
    }

    pub fn sound_state(&self, id: SoundId) -> Option<&LoadState> {
        self.sounds.get(id.0 as usize).map(|s| &s.state)
    }

    pub fn sound_entry(&self, id: SoundId) -> Option<&SoundEntry> {
        self.sounds.get(id.0 as usize)
    }

    pub fn texture_path(&self, handle: TextureHandle) -> Option<&str> {
        self.textures.get(handle.0 as usize).map(|t| t.path.as_str())
    }

    pub fn sound_path(&self, id: SoundId) -> Option<&str> {
        self.sounds.get(id.0 as usize).map(|s| s.path.as_str())
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    /// Name of the background texture, if the manifest declared one.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// The host finished decoding a texture.
    pub fn texture_loaded(&mut self, handle: TextureHandle) -> Result<(), AssetError> {
        let entry = self
            .textures
            .get_mut(handle.0 as usize)
            .ok_or(AssetError::UnknownTexture(handle))?;
        Self::complete(&entry.name, &mut entry.state, LoadState::Ready);
        Ok(())
    }

    /// The host could not fetch or decode a texture. The material it belongs to
    /// renders untextured; nothing else is affected.
    pub fn texture_failed(&mut self, handle: TextureHandle, reason: &str) -> Result<(), AssetError> {
        let entry = self
            .textures
            .get_mut(handle.0 as usize)
            .ok_or(AssetError::UnknownTexture(handle))?;
        warn!(
            "{}",
            AssetError::LoadFailed { name: entry.name.clone(), reason: reason.to_string() }
        );
        Self::complete(&entry.name, &mut entry.state, LoadState::Failed(reason.to_string()));
        Ok(())
    }

    pub fn sound_loaded(&mut self, id: SoundId) -> Result<(), AssetError> {
        let entry = self
            .sounds
            .get_mut(id.0 as usize)
            .ok_or(AssetError::UnknownSound(id))?;
        Self::complete(&entry.name, &mut entry.state, LoadState::Ready);
        Ok(())
    }

    pub fn sound_failed(&mut self, id: SoundId, reason: &str) -> Result<(), AssetError> {
        let entry = self
            .sounds
            .get_mut(id.0 as usize)
            .ok_or(AssetError::UnknownSound(id))?;
        warn!(
            "{}",
            AssetError::LoadFailed { name: entry.name.clone(), reason: reason.to_string() }
        );
        Self::complete(&entry.name, &mut entry.state, LoadState::Failed(reason.to_string()));
        Ok(())
    }

    /// Handle the renderer may sample this frame: only textures that finished loading.
    pub fn texture_for_render(&self, handle: TextureHandle) -> Option<TextureHandle> {
        match self.texture_state(handle) {
            Some(LoadState::Ready) => Some(handle),
            _ => None,
        }
    }

    pub fn is_sound_ready(&self, id: SoundId) -> bool {
        matches!(self.sound_state(id), Some(LoadState::Ready))
    }

    // First completion wins; the host may retry and report twice.
    fn complete(name: &str, state: &mut LoadState, next: LoadState) {
        if *state != LoadState::Pending {
            warn!("ignoring repeated load completion for '{name}'");
            return;
        }
        *state = next;
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
