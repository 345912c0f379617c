//! Solar System: textured sun and planets on spinning pivots.
//!
//! Orbits are pure rotation: each planet's pivot turns a fixed amount per
//! frame. Camera: drag to orbit, right-drag to pan, scroll to zoom.
//! The first click or touch after the music has loaded starts it.

use orrery_engine::*;
use log::{error, info};

use crate::bodies::{self, PLANETS, PLANET_COUNT};
use crate::builder::{self, CelestialBody, PlanetNodes, RingSpec};

pub struct SolarSystem {
    sun: Option<NodeId>,
    planets: [Option<PlanetNodes>; PLANET_COUNT],
    music: AudioTrigger,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            sun: None,
            planets: [None; PLANET_COUNT],
            music: AudioTrigger::new(None),
        }
    }

    fn set_spin(ctx: &mut EngineContext, id: NodeId, radians_per_frame: f32) {
        if let Some(node) = ctx.scene.get_mut(id) {
            node.spin = Some(Spin::y(radians_per_frame));
        }
    }

    fn setup_camera(ctx: &mut EngineContext) {
        let mut camera = PerspectiveCamera::new(
            bodies::CAMERA_FOV_DEGREES,
            ctx.viewport.aspect(),
            bodies::CAMERA_NEAR,
            bodies::CAMERA_FAR,
        );
        camera.look_at(bodies::CAMERA_POSITION, glam::Vec3::ZERO);
        ctx.controls = OrbitControls::from_camera(&camera)
            .with_distance_limits(bodies::CAMERA_MIN_DISTANCE, bodies::CAMERA_MAX_DISTANCE);
        ctx.camera = camera;
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SolarSystem {
    fn config(&self) -> AppConfig {
        AppConfig {
            max_instances: 32,
            max_lights: 4,
            max_sounds: 4,
            ..AppConfig::default()
        }
    }

    fn manifest(&self) -> AssetManifest {
        bodies::default_manifest()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        Self::setup_camera(ctx);
        builder::build_lighting(ctx);
        let stars = ctx.assets.texture(bodies::STARS_TEXTURE);
        ctx.set_background(stars);

        let sun_texture = ctx.assets.texture(bodies::SUN_TEXTURE);
        match builder::create_sun(ctx, bodies::SUN_RADIUS, sun_texture) {
            Ok(id) => {
                Self::set_spin(ctx, id, bodies::SUN_SPIN);
                self.sun = Some(id);
            }
            Err(e) => error!("sun: {e}"),
        }

        for (slot, desc) in self.planets.iter_mut().zip(PLANETS.iter()) {
            let body = CelestialBody {
                name: desc.name.to_string(),
                radius: desc.radius,
                texture: ctx.assets.texture(desc.texture),
                orbital_distance: desc.distance,
                ring: desc.ring.as_ref().map(|r| RingSpec {
                    inner_radius: r.inner_radius,
                    outer_radius: r.outer_radius,
                    texture: ctx.assets.texture(r.texture),
                }),
            };
            match builder::create_planet(ctx, &body) {
                Ok(nodes) => {
                    Self::set_spin(ctx, nodes.mesh, desc.self_spin);
                    Self::set_spin(ctx, nodes.pivot, desc.orbit_spin);
                    *slot = Some(nodes);
                }
                // Skip the body; the rest of the system still runs.
                Err(e) => error!("{}: {e}", desc.name),
            }
        }

        self.music = AudioTrigger::new(ctx.assets.sound(bodies::MUSIC));
        info!(
            "solar system built: sun + {} planets",
            self.planets.iter().filter(|p| p.is_some()).count()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            if !event.is_gesture() {
                continue;
            }
            if let Some(play) = self.music.on_gesture(&ctx.assets) {
                ctx.emit_sound(play);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::bridge::protocol::HEADER_INSTANCE_COUNT;
    use orrery_web::AppRunner;
    use glam::{EulerRot, Vec3};
    use std::f32::consts::{PI, TAU};

    fn started() -> AppRunner<SolarSystem> {
        let mut runner = AppRunner::new(SolarSystem::new());
        runner.init();
        runner
    }

    /// Wrap into (-PI, PI], the range `to_euler` reports.
    fn wrap(angle: f32) -> f32 {
        let a = angle.rem_euclid(TAU);
        if a > PI { a - TAU } else { a }
    }

    fn yaw(ctx: &EngineContext, id: NodeId) -> f32 {
        ctx.scene.get(id).unwrap().local.rotation.to_euler(EulerRot::YXZ).0
    }

    fn nodes(runner: &AppRunner<SolarSystem>, planet: usize) -> PlanetNodes {
        runner.app().planets[planet].unwrap()
    }

    #[test]
    fn scene_has_sun_planets_and_rings() {
        let mut runner = started();
        runner.tick(1.0 / 60.0);
        let ctx = runner.context();
        // root + sun + 8 pivots + 8 bodies + 2 rings
        assert_eq!(ctx.scene.len(), 20);
        assert_eq!(ctx.lights.count(), 2);
        assert_eq!(runner.frame_slice()[HEADER_INSTANCE_COUNT], 11.0);
        assert!(nodes(&runner, bodies::EARTH).ring.is_none());
        assert!(nodes(&runner, bodies::SATURN).ring.is_some());
        assert!(nodes(&runner, bodies::URANUS).ring.is_some());
    }

    #[test]
    fn spins_accumulate_per_tick() {
        const TICKS: usize = 150;
        let mut runner = started();
        for _ in 0..TICKS {
            runner.tick(1.0 / 60.0);
        }
        let ctx = runner.context();

        for planet in [bodies::MERCURY, bodies::EARTH, bodies::SATURN] {
            let desc = &PLANETS[planet];
            let n = nodes(&runner, planet);
            let self_angle = yaw(ctx, n.mesh);
            let orbit_angle = yaw(ctx, n.pivot);
            assert!(
                (self_angle - wrap(desc.self_spin * TICKS as f32)).abs() < 1e-3,
                "{} self spin {self_angle}",
                desc.name
            );
            assert!(
                (orbit_angle - wrap(desc.orbit_spin * TICKS as f32)).abs() < 1e-3,
                "{} orbit spin {orbit_angle}",
                desc.name
            );
        }

        let sun = runner.app().sun.unwrap();
        assert!((yaw(ctx, sun) - wrap(bodies::SUN_SPIN * TICKS as f32)).abs() < 1e-3);
    }

    #[test]
    fn bodies_never_move_locally() {
        let mut runner = started();
        for _ in 0..200 {
            runner.tick(1.0 / 60.0);
        }
        let ctx = runner.context();
        let saturn = nodes(&runner, bodies::SATURN);
        assert_eq!(ctx.scene.get(saturn.mesh).unwrap().local.translation, Vec3::new(150.0, 0.0, 0.0));
        assert_eq!(ctx.scene.get(saturn.ring.unwrap()).unwrap().local.translation.x, 150.0);
    }

    #[test]
    fn ring_rides_the_pivot() {
        let mut runner = started();
        for _ in 0..300 {
            runner.tick(1.0 / 60.0);
        }
        let ctx = runner.context();
        let saturn = nodes(&runner, bodies::SATURN);
        let body = ctx.scene.world_matrix(saturn.mesh).unwrap().w_axis.truncate();
        let ring = ctx.scene.world_matrix(saturn.ring.unwrap()).unwrap().w_axis.truncate();
        assert!(body.abs_diff_eq(ring, 1e-3));
        assert!((body.length() - 150.0).abs() < 1e-2);
        assert!(body.z.abs() > 1.0, "saturn should have left the +X axis: {body}");
    }

    #[test]
    fn camera_starts_at_its_pose() {
        let runner = started();
        let camera = &runner.context().camera;
        assert!(camera.position.abs_diff_eq(bodies::CAMERA_POSITION, 1e-4));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.fov_y_degrees, 45.0);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn three_clicks_one_play() {
        let mut runner = started();
        let music = runner.context().assets.sound(bodies::MUSIC).unwrap();
        runner.sound_loaded(music.0).unwrap();

        let mut plays = 0;
        for _ in 0..3 {
            runner.push_input(InputEvent::Click { x: 10.0, y: 10.0 });
            runner.tick(1.0 / 60.0);
            plays += runner.context().sounds.len();
        }
        assert_eq!(plays, 1);
        assert_eq!(runner.app().music.state(), TriggerState::Playing);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut runner = started();
        runner.resize(1024.0, 768.0);
        let aspect = runner.context().camera.aspect;
        let viewport = runner.context().viewport;
        runner.resize(1024.0, 768.0);
        assert_eq!(runner.context().camera.aspect, aspect);
        assert_eq!(runner.context().viewport, viewport);
    }
}
