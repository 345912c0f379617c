/// Constant rotation about the node's local Y axis, applied once per frame.
///
/// The increment is per frame invocation, not per second: a 120 Hz display
/// spins bodies twice as fast as a 60 Hz one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub radians_per_frame: f32,
}

impl Spin {
    pub fn y(radians_per_frame: f32) -> Self {
        Self { radians_per_frame }
    }
}
