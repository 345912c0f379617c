//! Body table, scene constants and the built-in asset manifest.
//!
//! Sizes and distances are illustrative scene units, not to scale.
//! Spin rates are radians per rendered frame.

use glam::Vec3;
use orrery_engine::{AssetManifest, SoundDescriptor};

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(-90.0, 140.0, 140.0);
/// Dolly limits, kept inside the far plane so Neptune never clips.
pub const CAMERA_MIN_DISTANCE: f32 = 20.0;
pub const CAMERA_MAX_DISTANCE: f32 = 600.0;

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_COLOR: u32 = 0x333333;
pub const AMBIENT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_COLOR: u32 = 0xffffff;
pub const POINT_LIGHT_INTENSITY: f32 = 10.0;
pub const POINT_LIGHT_DISTANCE: f32 = 1000.0;
pub const DIRECTIONAL_LIGHT_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(-100.0, 100.0, 100.0);

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 12.0;
pub const SUN_SPIN: f32 = 0.002;

// ── Assets ───────────────────────────────────────────────────────────

pub const STARS_TEXTURE: &str = "stars";
pub const SUN_TEXTURE: &str = "sun";
pub const MUSIC: &str = "background_music";
pub const MUSIC_VOLUME: f32 = 0.5;

// ── Planets ──────────────────────────────────────────────────────────

pub struct RingDesc {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

/// Static description of one planet.
pub struct PlanetDesc {
    pub name: &'static str,
    pub radius: f32,
    /// Distance from the sun along the pivot's local X.
    pub distance: f32,
    pub texture: &'static str,
    pub ring: Option<RingDesc>,
    /// Rotation of the body about its own axis.
    pub self_spin: f32,
    /// Rotation of the pivot, which carries the body around the sun.
    pub orbit_spin: f32,
}

pub const PLANETS: [PlanetDesc; PLANET_COUNT] = [
    PlanetDesc { name: "mercury", radius: 4.0,  distance: 20.0,  texture: "mercury", ring: None, self_spin: 0.001,  orbit_spin: 0.001 },
    PlanetDesc { name: "venus",   radius: 5.0,  distance: 40.0,  texture: "venus",   ring: None, self_spin: 0.0012, orbit_spin: 0.0015 },
    PlanetDesc { name: "earth",   radius: 5.56, distance: 60.0,  texture: "earth",   ring: None, self_spin: 0.012,  orbit_spin: 0.0012 },
    PlanetDesc { name: "mars",    radius: 5.0,  distance: 80.0,  texture: "mars",    ring: None, self_spin: 0.013,  orbit_spin: 0.0019 },
    PlanetDesc { name: "jupiter", radius: 6.0,  distance: 100.0, texture: "jupiter", ring: None, self_spin: 0.04,   orbit_spin: 0.0023 },
    PlanetDesc {
        name: "saturn", radius: 8.0, distance: 150.0, texture: "saturn",
        ring: Some(RingDesc { inner_radius: 10.0, outer_radius: 20.0, texture: "saturn_ring" }),
        self_spin: 0.01, orbit_spin: 0.0021,
    },
    PlanetDesc {
        name: "uranus", radius: 8.2, distance: 200.0, texture: "uranus",
        ring: Some(RingDesc { inner_radius: 10.0, outer_radius: 20.0, texture: "uranus_ring" }),
        self_spin: 0.01, orbit_spin: 0.0015,
    },
    PlanetDesc { name: "neptune", radius: 5.0,  distance: 240.0, texture: "neptune", ring: None, self_spin: 0.01,   orbit_spin: 0.001 },
];

/// Manifest used until (or unless) the host supplies `assets.json`.
pub fn default_manifest() -> AssetManifest {
    let mut manifest = AssetManifest::new()
        .with_texture(STARS_TEXTURE, "img/stars.jpg")
        .with_texture(SUN_TEXTURE, "img/sun.jpg")
        .with_background(STARS_TEXTURE)
        .with_sound(
            MUSIC,
            SoundDescriptor {
                path: "backgroundmusic.mp3".into(),
                looping: true,
                volume: MUSIC_VOLUME,
            },
        );
    for planet in &PLANETS {
        manifest = manifest.with_texture(planet.texture, format!("img/{}.jpg", planet.texture));
        if let Some(ring) = &planet.ring {
            manifest = manifest.with_texture(ring.texture, format!("img/{}.png", ring.texture));
        }
    }
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_covers_every_body() {
        let manifest = default_manifest();
        assert_eq!(manifest.textures.len(), 12);
        assert_eq!(manifest.textures["saturn_ring"].path, "img/saturn_ring.png");
        assert_eq!(manifest.textures["earth"].path, "img/earth.jpg");
        assert_eq!(manifest.background.as_deref(), Some(STARS_TEXTURE));

        let music = &manifest.sounds[MUSIC];
        assert!(music.looping);
        assert_eq!(music.volume, 0.5);
    }

    #[test]
    fn only_saturn_and_uranus_have_rings() {
        let ringed: Vec<_> = PLANETS.iter().filter(|p| p.ring.is_some()).map(|p| p.name).collect();
        assert_eq!(ringed, ["saturn", "uranus"]);
    }
}
