//! Scene lighting: one ambient term plus a list of point and directional lights.
//!
//! Lights are persistent; add them once at startup. Each frame the runner
//! serializes them into the frame buffer for the host's lighting pass.
//! Only `Standard` materials react to lights.

use glam::Vec3;

/// Light kind codes on the wire.
pub const LIGHT_KIND_POINT: f32 = 0.0;
pub const LIGHT_KIND_DIRECTIONAL: f32 = 1.0;

/// Convert a 0xRRGGBB colour to linear-ish [0..1] floats.
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// Uniform light with no position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(hex: u32, intensity: f32) -> Self {
        Self { color: rgb_from_hex(hex), intensity }
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self { color: [0.0; 3], intensity: 1.0 }
    }
}

/// Omnidirectional light at a world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Range cutoff in world units; 0 = infinite.
    pub distance: f32,
}

impl PointLight {
    pub fn new(hex: u32, intensity: f32, distance: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            color: rgb_from_hex(hex),
            intensity,
            distance,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}

/// Infinitely distant light shining from `position` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(hex: u32, intensity: f32) -> Self {
        Self {
            position: Vec3::Y,
            target: Vec3::ZERO,
            color: rgb_from_hex(hex),
            intensity,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Normalized direction the light travels (from position toward target).
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point(PointLight),
    Directional(DirectionalLight),
}

impl Light {
    /// Floats per light on the wire:
    /// `[kind, r, g, b, intensity, distance, x, y, z, pad, pad, pad]`.
    /// xyz is the position for point lights, the direction for directional ones.
    pub const FLOATS: usize = 12;

    pub fn to_floats(&self) -> [f32; Light::FLOATS] {
        match self {
            Light::Point(p) => [
                LIGHT_KIND_POINT,
                p.color[0], p.color[1], p.color[2],
                p.intensity,
                p.distance,
                p.position.x, p.position.y, p.position.z,
                0.0, 0.0, 0.0,
            ],
            Light::Directional(d) => {
                let dir = d.direction();
                [
                    LIGHT_KIND_DIRECTIONAL,
                    d.color[0], d.color[1], d.color[2],
                    d.intensity,
                    0.0,
                    dir.x, dir.y, dir.z,
                    0.0, 0.0, 0.0,
                ]
            }
        }
    }
}

/// The scene's lighting rig.
pub struct LightRig {
    ambient: AmbientLight,
    lights: Vec<Light>,
}

impl LightRig {
    pub fn new() -> Self {
        Self {
            ambient: AmbientLight::default(),
            lights: Vec::new(),
        }
    }

    pub fn set_ambient(&mut self, ambient: AmbientLight) {
        self.ambient = ambient;
    }

    pub fn ambient(&self) -> AmbientLight {
        self.ambient
    }

    pub fn add(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Serialize up to `out.len() / Light::FLOATS` lights. Returns how many were written.
    pub fn write_into(&self, out: &mut [f32]) -> usize {
        let capacity = out.len() / Light::FLOATS;
        let mut written = 0;
        for (light, chunk) in self.lights.iter().zip(out.chunks_exact_mut(Light::FLOATS)) {
            chunk.copy_from_slice(&light.to_floats());
            written += 1;
        }
        if self.lights.len() > capacity {
            log::warn!("light rig has {} lights, frame holds {}", self.lights.len(), capacity);
        }
        written
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new()
    }
}
