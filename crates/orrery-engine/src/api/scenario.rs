use glam::Vec3;
use crate::api::error::ConfigError;
use crate::api::types::SurfaceSize;
use crate::core::world::World;
use crate::systems::controls::ControlsConfig;

/// Initial camera placement and projection.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    /// Point the camera looks at and orbits around.
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 20.0, 0.0),
            target: Vec3::ZERO,
        }
    }
}

/// Configuration for the engine, provided by the scenario.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of render instances per frame (default: 64).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Surface size assumed until the host reports the real one.
    pub surface: SurfaceSize,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_instances: 64,
            max_lights: 8,
            surface: SurfaceSize::new(800, 600),
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
        }
    }
}

/// The contract every visualization fulfills.
pub trait Scenario {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// Apply host-supplied JSON settings. Called before init, at most once.
    fn configure(&mut self, _json: &str) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Compose the scene: spawn bodies, pivots, rings and lights.
    fn init(&mut self, world: &mut World);

    /// Per-tick state advance, before controls and rendering.
    fn update(&mut self, world: &mut World);
}
