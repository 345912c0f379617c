//! Spin system: applies each node's per-frame rotation.

use crate::core::scene::SceneGraph;

/// Apply one frame of `Spin` to every node that has one.
///
/// Call exactly once per frame invocation, before building the render buffer.
/// Positions are never touched; orbits come from spinning a parent group.
pub fn tick_spins(scene: &mut SceneGraph) {
    for node in scene.iter_mut() {
        if let Some(spin) = node.spin {
            node.local.rotate_y(spin.radians_per_frame);
        }
    }
}
