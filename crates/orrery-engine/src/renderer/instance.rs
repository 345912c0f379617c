use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use crate::api::types::TextureHandle;
use crate::components::mesh::{Geometry, Mesh, Shading, Side};

/// Geometry kind codes on the wire.
pub const GEOMETRY_SPHERE: f32 = 0.0;
pub const GEOMETRY_RING: f32 = 1.0;

/// Texture slot value meaning "no texture bound yet".
pub const NO_TEXTURE: f32 = -1.0;

/// Per-mesh render data written to the frame buffer for the host renderer.
/// Must match the host protocol: 24 floats = 96 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshInstance {
    /// World matrix, column-major.
    pub model: [[f32; 4]; 4],
    /// `GEOMETRY_SPHERE` or `GEOMETRY_RING`.
    pub geometry: f32,
    /// Sphere radius, or ring inner radius.
    pub param_a: f32,
    /// Unused for spheres, ring outer radius.
    pub param_b: f32,
    /// Sphere width segments, or ring theta segments.
    pub segments_u: f32,
    /// Sphere height segments, 1 for rings.
    pub segments_v: f32,
    /// Texture handle, or `NO_TEXTURE` while the texture is pending or failed.
    pub texture: f32,
    /// 0 = basic (unlit), 1 = standard (lit).
    pub shading: f32,
    /// 0 = front faces, 1 = double-sided.
    pub side: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Pack a mesh at the given world transform. `texture` is the handle the
    /// renderer may sample this frame (None while the asset isn't ready).
    pub fn new(world: Mat4, mesh: &Mesh, texture: Option<TextureHandle>) -> Self {
        let (geometry, param_a, param_b, segments_u, segments_v) = match mesh.geometry {
            Geometry::Sphere { radius, width_segments, height_segments } => {
                (GEOMETRY_SPHERE, radius, 0.0, width_segments as f32, height_segments as f32)
            }
            Geometry::Ring { inner_radius, outer_radius, theta_segments } => {
                (GEOMETRY_RING, inner_radius, outer_radius, theta_segments as f32, 1.0)
            }
        };
        Self {
            model: world.to_cols_array_2d(),
            geometry,
            param_a,
            param_b,
            segments_u,
            segments_v,
            texture: texture.map(|t| t.0 as f32).unwrap_or(NO_TEXTURE),
            shading: match mesh.material.shading {
                Shading::Basic => 0.0,
                Shading::Standard => 1.0,
            },
            side: match mesh.material.side {
                Side::Front => 0.0,
                Side::Double => 1.0,
            },
        }
    }
}

/// Mesh instances for one frame, in scene graph order.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::Material;

    #[test]
    fn mesh_instance_is_24_floats() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
    }

    #[test]
    fn ring_packs_both_radii() {
        let mesh = Mesh::new(
            Geometry::ring(10.0, 20.0),
            Material::standard(Some(TextureHandle(3))).with_side(Side::Double),
        );
        let inst = MeshInstance::new(Mat4::IDENTITY, &mesh, Some(TextureHandle(3)));
        assert_eq!(inst.geometry, GEOMETRY_RING);
        assert_eq!(inst.param_a, 10.0);
        assert_eq!(inst.param_b, 20.0);
        assert_eq!(inst.segments_u, 30.0);
        assert_eq!(inst.texture, 3.0);
        assert_eq!(inst.shading, 1.0);
        assert_eq!(inst.side, 1.0);
    }

    #[test]
    fn missing_texture_packs_sentinel() {
        let mesh = Mesh::new(Geometry::sphere(5.0), Material::basic(Some(TextureHandle(1))));
        let inst = MeshInstance::new(Mat4::IDENTITY, &mesh, None);
        assert_eq!(inst.texture, NO_TEXTURE);
        assert_eq!(inst.geometry, GEOMETRY_SPHERE);
        assert_eq!(inst.segments_u, 25.0);
        assert_eq!(inst.segments_v, 20.0);
    }

    #[test]
    fn as_floats_flattens_instances() {
        let mut buf = RenderBuffer::new();
        buf.push(MeshInstance::default());
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.as_floats().len(), 2 * MeshInstance::FLOATS);
    }
}
