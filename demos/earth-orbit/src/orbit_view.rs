//! Earth Orbit: a textured earth circling an emissive sun.
//!
//! The earth rides an invisible pivot. Each tick the pivot turns by the
//! orbital rate and the earth spins by its own rate; nothing else moves.
//! Drag to rotate the camera, scroll to zoom.

use orrery_engine::*;

use crate::composer::{compose, Composed};
use crate::config::OrbitSceneConfig;

#[derive(Default)]
pub struct EarthOrbit {
    settings: OrbitSceneConfig,
    composed: Option<Composed>,
}

impl EarthOrbit {
    pub fn settings(&self) -> &OrbitSceneConfig {
        &self.settings
    }

    pub fn composed(&self) -> Option<&Composed> {
        self.composed.as_ref()
    }
}

impl Scenario for EarthOrbit {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            controls: self.settings.controls.clone(),
            ..EngineConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        self.settings = OrbitSceneConfig::from_json(json)?;
        Ok(())
    }

    fn init(&mut self, world: &mut World) {
        self.composed = Some(compose(world, &self.settings));
    }

    fn update(&mut self, world: &mut World) {
        let Some(composed) = self.composed else {
            return;
        };
        let planet = &self.settings.planet;
        composed.planet.advance_orbit(&mut world.scene, planet.orbital_rate);
        composed.planet.advance_spin(&mut world.scene, planet.spin_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;
    use glam::Vec3;

    #[derive(Default)]
    struct NullRenderer {
        frames: usize,
        size: Option<(u32, u32)>,
    }

    impl Renderer for NullRenderer {
        fn backend(&self) -> &'static str {
            "null"
        }

        fn draw(&mut self, _frame: &FrameData) {
            self.frames += 1;
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = Some((width, height));
        }
    }

    fn running() -> (AnimationDriver<EarthOrbit>, NullRenderer) {
        let mut driver = AnimationDriver::new(EarthOrbit::default());
        driver.init();
        (driver, NullRenderer::default())
    }

    fn handles(driver: &AnimationDriver<EarthOrbit>) -> Composed {
        *driver.scenario().composed().unwrap()
    }

    #[test]
    fn hundred_ticks_advance_both_angles() {
        let (mut driver, mut renderer) = running();
        for _ in 0..100 {
            driver.tick(&mut renderer);
        }
        let planet = handles(&driver).planet;
        let scene = &driver.world().scene;
        assert!((planet.orbit_angle(scene) - 1.0).abs() < 1e-4);
        assert!((planet.spin_angle(scene) - 3.0).abs() < 1e-4);
        assert_eq!(renderer.frames, 100);
    }

    #[test]
    fn rates_are_independent() {
        let mut driver = AnimationDriver::new(EarthOrbit::default());
        driver
            .configure(r#"{ "planet": { "orbital_rate": 0.0, "spin_rate": 0.1 } }"#)
            .unwrap();
        driver.init();
        let mut renderer = NullRenderer::default();
        for _ in 0..10 {
            driver.tick(&mut renderer);
        }
        let planet = handles(&driver).planet;
        let scene = &driver.world().scene;
        assert_eq!(planet.orbit_angle(scene), 0.0);
        assert!((planet.spin_angle(scene) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn angles_stay_wrapped() {
        let (mut driver, mut renderer) = running();
        // 700 orbit ticks pass 2π once
        for _ in 0..700 {
            driver.tick(&mut renderer);
        }
        let planet = handles(&driver).planet;
        let scene = &driver.world().scene;
        let orbit = planet.orbit_angle(scene);
        let spin = planet.spin_angle(scene);
        assert!((0.0..TAU).contains(&orbit));
        assert!((0.0..TAU).contains(&spin));
        assert!((orbit - (7.0 - TAU)).abs() < 1e-3);
    }

    #[test]
    fn earth_revolves_at_fixed_radius() {
        let (mut driver, mut renderer) = running();
        let planet = handles(&driver).planet;
        let before = driver.world().scene.get(planet.body).unwrap().local.translation;

        for _ in 0..157 {
            driver.tick(&mut renderer);
        }
        let scene = &driver.world().scene;
        let earth = scene.get(planet.body).unwrap();
        assert_eq!(earth.local.translation, before);
        assert!((earth.world_position().length() - 8.5).abs() < 1e-4);
        // roughly a quarter turn about +Y takes +X towards -Z
        assert!(earth.world_position().z < -8.0);
    }

    #[test]
    fn star_and_backdrop_never_move() {
        let (mut driver, mut renderer) = running();
        for _ in 0..50 {
            driver.tick(&mut renderer);
        }
        let composed = handles(&driver);
        let scene = &driver.world().scene;
        let star = scene.get(composed.star).unwrap();
        let backdrop = scene.get(composed.backdrop).unwrap();
        assert_eq!(star.local.rotation, Vec3::ZERO);
        assert_eq!(backdrop.local.rotation, Vec3::ZERO);
        assert!((star.world_position() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let (mut driver, mut renderer) = running();
        assert!((driver.world().camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        driver.resize(1920, 1080, &mut renderer);
        assert!((driver.world().camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(renderer.size, Some((1920, 1080)));
        assert_eq!(driver.world().viewport.state(), ViewportState::Normal);
    }

    #[test]
    fn controls_come_from_settings() {
        let mut driver = AnimationDriver::new(EarthOrbit::default());
        driver
            .configure(r#"{ "controls": { "damping_factor": 0.5 } }"#)
            .unwrap();
        assert_eq!(driver.config().controls.damping_factor, 0.5);
        assert_eq!(driver.world().controls.config().damping_factor, 0.5);
    }

    #[test]
    fn stop_freezes_the_scene() {
        let (mut driver, mut renderer) = running();
        driver.tick(&mut renderer);
        driver.stop();
        assert!(!driver.tick(&mut renderer));
        let planet = handles(&driver).planet;
        assert!((planet.orbit_angle(&driver.world().scene) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn camera_starts_above_looking_down() {
        let (driver, _) = running();
        let camera = &driver.world().camera;
        assert_eq!(camera.position, Vec3::new(0.0, 20.0, 0.0));
        let clip = camera.view_projection_matrix().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
    }
}
