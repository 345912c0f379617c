//! Scene construction: planets as pivot + body (+ ring), the sun, the lighting rig.
//!
//! A planet's body sits at `x = orbital_distance` inside a pivot at the
//! origin. Spinning the pivot carries the body (and its ring) around the sun;
//! the body's own position is never touched after construction.

use std::f32::consts::FRAC_PI_2;
use glam::{Quat, Vec3};
use orrery_engine::{
    AmbientLight, DirectionalLight, EngineContext, Geometry, Light, Material, Mesh, Node, NodeId,
    PointLight, SceneError, Side, TextureHandle,
};

use crate::bodies;

#[derive(Debug, Clone, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: Option<TextureHandle>,
}

/// Everything needed to build one orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub radius: f32,
    pub texture: Option<TextureHandle>,
    pub orbital_distance: f32,
    pub ring: Option<RingSpec>,
}

/// Node ids of a constructed planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetNodes {
    pub pivot: NodeId,
    pub mesh: NodeId,
    pub ring: Option<NodeId>,
}

fn validate(body: &CelestialBody) -> Result<(), SceneError> {
    if !(body.radius.is_finite() && body.radius > 0.0) {
        return Err(SceneError::InvalidRadius(body.radius));
    }
    if !(body.orbital_distance.is_finite() && body.orbital_distance >= 0.0) {
        return Err(SceneError::InvalidOrbitalDistance(body.orbital_distance));
    }
    if let Some(ring) = &body.ring {
        let (inner, outer) = (ring.inner_radius, ring.outer_radius);
        if !(inner.is_finite() && outer.is_finite() && inner >= 0.0 && inner < outer) {
            return Err(SceneError::InvalidRing { inner, outer });
        }
    }
    Ok(())
}

/// Build a planet under the scene root. Nothing is spawned if the body is invalid.
pub fn create_planet(ctx: &mut EngineContext, body: &CelestialBody) -> Result<PlanetNodes, SceneError> {
    validate(body)?;

    let root = ctx.scene.root();
    let offset = Vec3::new(body.orbital_distance, 0.0, 0.0);

    let pivot = ctx.scene.spawn(Node::new().with_tag(format!("{}_pivot", body.name)), root)?;
    let mesh = ctx.scene.spawn(
        Node::new()
            .with_tag(body.name.clone())
            .with_translation(offset)
            .with_mesh(Mesh::new(Geometry::sphere(body.radius), Material::basic(body.texture))),
        pivot,
    )?;

    let ring = match &body.ring {
        Some(desc) => Some(ctx.scene.spawn(
            Node::new()
                .with_tag(format!("{}_ring", body.name))
                .with_translation(offset)
                // Lay the ring flat: its face normal becomes +Y.
                .with_rotation(Quat::from_rotation_x(-FRAC_PI_2))
                .with_mesh(Mesh::new(
                    Geometry::ring(desc.inner_radius, desc.outer_radius),
                    Material::standard(desc.texture).with_side(Side::Double),
                )),
            pivot,
        )?),
        None => None,
    };

    Ok(PlanetNodes { pivot, mesh, ring })
}

/// The unlit sun, directly under the root.
pub fn create_sun(ctx: &mut EngineContext, radius: f32, texture: Option<TextureHandle>) -> Result<NodeId, SceneError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(SceneError::InvalidRadius(radius));
    }
    let root = ctx.scene.root();
    ctx.scene.spawn(
        Node::new()
            .with_tag("sun")
            .with_mesh(Mesh::new(Geometry::sphere(radius), Material::basic(texture))),
        root,
    )
}

/// Ambient fill, a point light inside the sun, and a directional key light.
pub fn build_lighting(ctx: &mut EngineContext) {
    ctx.lights.set_ambient(AmbientLight::new(bodies::AMBIENT_COLOR, bodies::AMBIENT_INTENSITY));
    ctx.lights.add(Light::Point(
        PointLight::new(bodies::POINT_LIGHT_COLOR, bodies::POINT_LIGHT_INTENSITY, bodies::POINT_LIGHT_DISTANCE)
            .with_position(Vec3::ZERO),
    ));
    ctx.lights.add(Light::Directional(
        DirectionalLight::new(bodies::DIRECTIONAL_LIGHT_COLOR, bodies::DIRECTIONAL_LIGHT_INTENSITY)
            .with_position(bodies::DIRECTIONAL_LIGHT_POSITION),
    ));
}
