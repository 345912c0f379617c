use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera looking at a target point.
///
/// The projection matrix is cached; after changing `fov_y_degrees`, `aspect`,
/// `near` or `far`, call `update_projection_matrix` (or use `set_aspect`,
/// which does it for you).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Near clip distance (positive).
    pub near: f32,
    /// Far clip distance (positive, > near).
    pub far: f32,
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// World up direction.
    pub up: Vec3,
    projection: Mat4,
}

/// GPU-side camera block: view (16) + projection (16) + eye position (4).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 36;
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_y_degrees,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Move the eye and aim at `target`.
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Change the aspect ratio and recompute the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Recompute the cached projection from the current parameters.
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            position: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_uniform_is_36_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }

    #[test]
    fn set_aspect_refreshes_projection() {
        let mut cam = PerspectiveCamera::new(45.0, 1.0, 0.1, 1000.0);
        let before = cam.projection_matrix();
        cam.set_aspect(2.0);
        let after = cam.projection_matrix();
        assert_ne!(before, after);
        // x scale is focal / aspect
        assert!((after.x_axis.x * 2.0 - before.x_axis.x).abs() < 1e-5);
    }

    #[test]
    fn stale_projection_until_updated() {
        let mut cam = PerspectiveCamera::new(45.0, 1.0, 0.1, 1000.0);
        let before = cam.projection_matrix();
        cam.fov_y_degrees = 60.0;
        assert_eq!(cam.projection_matrix(), before);
        cam.update_projection_matrix();
        assert_ne!(cam.projection_matrix(), before);
    }

    #[test]
    fn view_matrix_puts_target_in_front() {
        let mut cam = PerspectiveCamera::default();
        cam.look_at(Vec3::new(-90.0, 140.0, 140.0), Vec3::ZERO);
        let in_view = cam.view_matrix().transform_point3(Vec3::ZERO);
        // Right-handed view space looks down -Z.
        assert!(in_view.z < 0.0);
        assert!((in_view.z.abs() - cam.distance()).abs() < 1e-3);
    }
}
