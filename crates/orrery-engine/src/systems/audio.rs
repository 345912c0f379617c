//! One-shot background music trigger.
//!
//! Browsers refuse to start audio before the user interacts with the page, so
//! playback waits for the first click or touch after the music has loaded.
//! Once it has fired, the trigger never fires again.

use log::info;
use crate::api::types::{SoundEvent, SoundId};
use crate::assets::registry::AssetRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// Waiting for a gesture.
    Armed,
    /// Play was requested; terminal.
    Playing,
}

#[derive(Debug, Clone)]
pub struct AudioTrigger {
    sound: Option<SoundId>,
    state: TriggerState,
}

impl AudioTrigger {
    /// Trigger for `sound`. `None` (sound missing from the manifest) never fires.
    pub fn new(sound: Option<SoundId>) -> Self {
        Self { sound, state: TriggerState::Armed }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Handle one user gesture. Returns the play request the first time the
    /// sound is ready; `None` before that and every time after.
    pub fn on_gesture(&mut self, assets: &AssetRegistry) -> Option<SoundEvent> {
        if self.state == TriggerState::Playing {
            return None;
        }
        let sound = self.sound?;
        if !assets.is_sound_ready(sound) {
            return None;
        }
        self.state = TriggerState::Playing;
        info!("starting background music (sound {})", sound.0);
        Some(SoundEvent::from(sound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::{AssetManifest, SoundDescriptor};

    fn assets() -> AssetRegistry {
        AssetRegistry::from_manifest(&AssetManifest::new().with_sound(
            "background_music",
            SoundDescriptor { path: "backgroundmusic.mp3".into(), looping: true, volume: 0.5 },
        ))
    }

    #[test]
    fn three_clicks_play_once() {
        let mut assets = assets();
        let music = assets.sound("background_music").unwrap();
        assets.sound_loaded(music).unwrap();

        let mut trigger = AudioTrigger::new(Some(music));
        let plays: Vec<_> = (0..3).filter_map(|_| trigger.on_gesture(&assets)).collect();
        assert_eq!(plays, vec![SoundEvent(music.0)]);
        assert_eq!(trigger.state(), TriggerState::Playing);
    }

    #[test]
    fn gestures_before_load_are_ignored() {
        let mut assets = assets();
        let music = assets.sound("background_music").unwrap();
        let mut trigger = AudioTrigger::new(Some(music));

        assert_eq!(trigger.on_gesture(&assets), None);
        assert_eq!(trigger.state(), TriggerState::Armed);

        assets.sound_loaded(music).unwrap();
        assert_eq!(trigger.on_gesture(&assets), Some(SoundEvent(music.0)));
    }

    #[test]
    fn failed_music_stays_silent() {
        let mut assets = assets();
        let music = assets.sound("background_music").unwrap();
        assets.sound_failed(music, "decode error").unwrap();

        let mut trigger = AudioTrigger::new(Some(music));
        for _ in 0..5 {
            assert_eq!(trigger.on_gesture(&assets), None);
        }
        assert_eq!(trigger.state(), TriggerState::Armed);
    }

    #[test]
    fn missing_sound_never_fires() {
        let mut trigger = AudioTrigger::new(None);
        assert_eq!(trigger.on_gesture(&AssetRegistry::new()), None);
    }
}
