//! Orbit controls: drag to orbit, right-drag to pan, scroll to dolly.
//!
//! The camera position is kept in spherical coordinates around `target`.
//! Controls only ever write the camera; nothing else in the scene moves.

use std::f32::consts::TAU;
use glam::Vec3;
use log::debug;
use crate::input::queue::{InputEvent, BUTTON_PRIMARY, BUTTON_SECONDARY};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::viewport::Viewport;

/// Keeps the polar angle off the poles, where the look-at basis degenerates.
const POLAR_EPS: f32 = 1e-3;

/// Multiplicative dolly per wheel notch.
const DOLLY_STEP: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Drag {
    None,
    Rotate { x: f32, y: f32 },
    Pan { x: f32, y: f32 },
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    /// Distance from target to eye.
    pub radius: f32,
    /// Angle around +Y, measured from +Z toward +X.
    pub azimuth: f32,
    /// Angle down from +Y.
    pub polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub enabled: bool,
    /// Camera field of view, used to convert pan pixels to world units.
    fov_y_degrees: f32,
    drag: Drag,
}

impl OrbitControls {
    /// Start from the camera's current pose.
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target: camera.target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            rotate_speed: 1.0,
            enabled: true,
            fov_y_degrees: camera.fov_y_degrees,
            drag: Drag::None,
        }
    }

    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self.radius = self.radius.clamp(min, max);
        self
    }

    /// Feed one input event. Returns true if the camera pose changed.
    pub fn handle(&mut self, event: &InputEvent, viewport: &Viewport) -> bool {
        if !self.enabled {
            return false;
        }
        match *event {
            InputEvent::PointerDown { x, y, button } => {
                self.drag = match button {
                    BUTTON_PRIMARY => Drag::Rotate { x, y },
                    BUTTON_SECONDARY => Drag::Pan { x, y },
                    _ => Drag::None,
                };
                false
            }
            InputEvent::PointerUp { .. } => {
                self.drag = Drag::None;
                false
            }
            InputEvent::PointerMove { x, y } => match self.drag {
                Drag::None => false,
                Drag::Rotate { x: px, y: py } => {
                    // A full-height drag turns the camera once around.
                    let h = viewport.height.max(1.0);
                    self.rotate(
                        -TAU * (x - px) / h * self.rotate_speed,
                        -TAU * (y - py) / h * self.rotate_speed,
                    );
                    self.drag = Drag::Rotate { x, y };
                    true
                }
                Drag::Pan { x: px, y: py } => {
                    self.pan(x - px, y - py, viewport);
                    self.drag = Drag::Pan { x, y };
                    true
                }
            },
            InputEvent::Wheel { delta_y } => {
                if delta_y > 0.0 {
                    self.dolly(1.0 / DOLLY_STEP);
                } else if delta_y < 0.0 {
                    self.dolly(DOLLY_STEP);
                } else {
                    return false;
                }
                true
            }
            InputEvent::Click { .. } | InputEvent::TouchStart { .. } => false,
        }
    }

    /// Orbit by the given angle deltas (radians).
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(TAU);
        self.polar = (self.polar + d_polar).clamp(POLAR_EPS, std::f32::consts::PI - POLAR_EPS);
    }

    /// Scale the orbit radius, clamped to the distance limits.
    pub fn dolly(&mut self, scale: f32) {
        self.radius = (self.radius * scale).clamp(self.min_distance, self.max_distance);
        debug!("orbit radius {}", self.radius);
    }

    /// Move target and eye together, in screen pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport: &Viewport) {
        let offset = self.offset();
        let forward = (-offset).normalize_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        // World units per pixel at the target's depth.
        let half_fov = self.fov_y_degrees.to_radians() / 2.0;
        let scale = 2.0 * self.radius * half_fov.tan() / viewport.height.max(1.0);
        self.target += (-dx * right + dy * up) * scale;
    }

    /// Eye position relative to the target.
    pub fn offset(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        )
    }

    /// Write the current pose to the camera.
    pub fn update(&self, camera: &mut PerspectiveCamera) {
        camera.look_at(self.target + self.offset(), self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::default();
        cam.look_at(Vec3::new(-90.0, 140.0, 140.0), Vec3::ZERO);
        cam
    }

    #[test]
    fn from_camera_reproduces_the_pose() {
        let mut cam = camera();
        let controls = OrbitControls::from_camera(&cam);
        controls.update(&mut cam);
        assert!(cam.position.abs_diff_eq(Vec3::new(-90.0, 140.0, 140.0), 1e-2), "{}", cam.position);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn primary_drag_changes_azimuth_and_keeps_target() {
        let cam = camera();
        let vp = Viewport::new(800.0, 600.0);
        let mut controls = OrbitControls::from_camera(&cam);
        let azimuth = controls.azimuth;
        let radius = controls.radius;

        controls.handle(&InputEvent::PointerDown { x: 100.0, y: 100.0, button: BUTTON_PRIMARY }, &vp);
        assert!(controls.handle(&InputEvent::PointerMove { x: 175.0, y: 100.0 }, &vp));
        controls.handle(&InputEvent::PointerUp { x: 175.0, y: 100.0, button: BUTTON_PRIMARY }, &vp);

        assert!((controls.azimuth - azimuth).abs() > 0.1);
        assert!((controls.radius - radius).abs() < 1e-4);
        assert_eq!(controls.target, Vec3::ZERO);

        // Released: further moves do nothing.
        assert!(!controls.handle(&InputEvent::PointerMove { x: 300.0, y: 300.0 }, &vp));
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut controls = OrbitControls::from_camera(&camera());
        controls.rotate(0.0, -10.0);
        assert!(controls.polar >= POLAR_EPS);
        controls.rotate(0.0, 20.0);
        assert!(controls.polar <= std::f32::consts::PI - POLAR_EPS);
    }

    #[test]
    fn wheel_dolly_is_clamped() {
        let vp = Viewport::new(800.0, 600.0);
        let mut controls = OrbitControls::from_camera(&camera()).with_distance_limits(50.0, 300.0);
        for _ in 0..200 {
            controls.handle(&InputEvent::Wheel { delta_y: -1.0 }, &vp);
        }
        assert_eq!(controls.radius, 50.0);
        for _ in 0..200 {
            controls.handle(&InputEvent::Wheel { delta_y: 1.0 }, &vp);
        }
        assert_eq!(controls.radius, 300.0);
    }

    #[test]
    fn secondary_drag_pans_target() {
        let vp = Viewport::new(800.0, 600.0);
        let mut controls = OrbitControls::from_camera(&camera());
        let offset = controls.offset();
        controls.handle(&InputEvent::PointerDown { x: 0.0, y: 0.0, button: BUTTON_SECONDARY }, &vp);
        controls.handle(&InputEvent::PointerMove { x: 40.0, y: 0.0 }, &vp);
        assert_ne!(controls.target, Vec3::ZERO);
        assert!(controls.offset().abs_diff_eq(offset, 1e-3));
    }

    #[test]
    fn disabled_controls_ignore_input() {
        let vp = Viewport::new(800.0, 600.0);
        let mut controls = OrbitControls::from_camera(&camera());
        controls.enabled = false;
        assert!(!controls.handle(&InputEvent::Wheel { delta_y: 1.0 }, &vp));
    }
}
