use crate::assets::registry::AssetRegistry;
use crate::core::scene::SceneGraph;
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Build the render buffer from the scene graph.
/// Propagates world transforms, then emits one instance per visible mesh node
/// in graph order. Textures that are still loading (or failed) are left unbound.
pub fn build_render_buffer(scene: &mut SceneGraph, assets: &AssetRegistry, buffer: &mut RenderBuffer) {
    buffer.clear();
    scene.propagate();

    for node in scene.iter() {
        let mesh = match &node.mesh {
            Some(m) => m,
            None => continue,
        };
        if !scene.is_world_visible(node.id()) {
            continue;
        }
        let Some(world) = scene.world_matrix(node.id()) else { continue };

        let texture = mesh.material.texture.and_then(|t| assets.texture_for_render(t));
        buffer.push(MeshInstance::new(world, mesh, texture));
    }
}
