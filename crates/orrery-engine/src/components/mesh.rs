use crate::api::types::TextureHandle;

/// Geometry primitive. The host tessellates it; Rust only carries parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// UV sphere centered on the node origin.
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Flat annulus in the node's local XY plane (face normal +Z).
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        theta_segments: u32,
    },
}

impl Geometry {
    pub const SPHERE_WIDTH_SEGMENTS: u32 = 25;
    pub const SPHERE_HEIGHT_SEGMENTS: u32 = 20;
    pub const RING_THETA_SEGMENTS: u32 = 30;

    pub fn sphere(radius: f32) -> Self {
        Geometry::Sphere {
            radius,
            width_segments: Self::SPHERE_WIDTH_SEGMENTS,
            height_segments: Self::SPHERE_HEIGHT_SEGMENTS,
        }
    }

    pub fn ring(inner_radius: f32, outer_radius: f32) -> Self {
        Geometry::Ring {
            inner_radius,
            outer_radius,
            theta_segments: Self::RING_THETA_SEGMENTS,
        }
    }
}

/// How a material responds to scene lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Flat texture colour, ignores lights.
    #[default]
    Basic,
    /// Physically based, lit by the scene's light rig.
    Standard,
}

/// Which faces are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    /// Both faces, for thin surfaces seen from either side.
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    pub shading: Shading,
    /// Surface texture. Untextured (default shaded) until the asset is ready.
    pub texture: Option<TextureHandle>,
    pub side: Side,
}

impl Material {
    pub fn basic(texture: Option<TextureHandle>) -> Self {
        Self {
            shading: Shading::Basic,
            texture,
            side: Side::Front,
        }
    }

    pub fn standard(texture: Option<TextureHandle>) -> Self {
        Self {
            shading: Shading::Standard,
            texture,
            side: Side::Front,
        }
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

/// Renderable component: geometry plus material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

impl Mesh {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}
