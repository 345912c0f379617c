// core/transform.rs
//
// Local transform of a scene node relative to its parent.
// Rotations compose in the node's own frame, so `rotate_y` spins a body
// about its own vertical axis no matter where its parent has turned it.

use glam::{Mat4, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position relative to parent.
    pub translation: Vec3,
    /// Orientation relative to parent.
    pub rotation: Quat,
    /// Scale relative to parent.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotate about the node's local X axis.
    pub fn rotate_x(&mut self, angle: f32) {
        self.rotate_local(Quat::from_rotation_x(angle));
    }

    /// Rotate about the node's local Y axis.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotate_local(Quat::from_rotation_y(angle));
    }

    fn rotate_local(&mut self, delta: Quat) {
        // Renormalize so drift doesn't accumulate over an unbounded number of frames.
        self.rotation = (self.rotation * delta).normalize();
    }

    /// Local matrix: translate * rotate * scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::EulerRot;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn rotate_y_accumulates() {
        let mut t = Transform::new();
        for _ in 0..100 {
            t.rotate_y(0.01);
        }
        let (yaw, _, _) = t.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 1.0).abs() < 1e-4, "yaw = {yaw}");
    }

    #[test]
    fn rotate_y_wraps_past_full_turn() {
        let mut t = Transform::new();
        t.rotate_y(TAU + 0.5);
        let (yaw, _, _) = t.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.5).abs() < 1e-4, "yaw = {yaw}");
    }

    #[test]
    fn matrix_moves_offset_by_rotation() {
        // A quarter turn about Y carries +X onto -Z.
        let t = Transform::new().with_rotation(Quat::from_rotation_y(FRAC_PI_2));
        let p = t.matrix().transform_point3(Vec3::new(10.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-4), "p = {p}");
    }

    #[test]
    fn rotate_x_tips_plane_normal_to_y() {
        // A flat XY-plane shape (normal +Z) tipped by -90 deg about X faces +Y.
        let mut t = Transform::new();
        t.rotate_x(-FRAC_PI_2);
        let normal = t.rotation * Vec3::Z;
        assert!(normal.abs_diff_eq(Vec3::Y, 1e-5), "normal = {normal}");
    }
}
