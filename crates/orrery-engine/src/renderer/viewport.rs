use log::debug;
use crate::renderer::camera::PerspectiveCamera;

/// Output surface size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Fit camera and output surface to a new window size.
///
/// Safe to call on every resize event: the result depends only on the
/// arguments. Degenerate sizes (a minimised tab reports 0) are ignored so the
/// aspect never becomes NaN or infinite.
pub fn resize(camera: &mut PerspectiveCamera, viewport: &mut Viewport, width: f32, height: f32) {
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        debug!("ignoring degenerate viewport size {width}x{height}");
        return;
    }
    camera.set_aspect(width / height);
    viewport.width = width;
    viewport.height = height;
    debug!("viewport resized to {width}x{height}");
}
