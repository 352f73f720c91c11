use crate::api::scenario::EngineConfig;
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::FrameData;
use crate::renderer::viewport::ViewportController;
use crate::systems::controls::OrbitControls;
use crate::systems::lighting::LightState;

/// All mutable visualization state, owned by the `AnimationDriver` and lent
/// out by `&mut` to the scenario, the viewport controller and the render step.
pub struct World {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub viewport: ViewportController,
    pub controls: OrbitControls,
    pub lights: LightState,
    pub textures: TextureRegistry,
}

impl World {
    pub fn new(config: &EngineConfig) -> Self {
        let cam = &config.camera;
        let mut camera = PerspectiveCamera::new(cam.fov_y_degrees, 1.0, cam.near, cam.far);
        camera.position = cam.position;
        camera.look_at(cam.target);

        let viewport = ViewportController::new(config.surface);
        viewport.sync_camera(&mut camera);

        Self {
            scene: Scene::new(),
            camera,
            viewport,
            controls: OrbitControls::new(config.controls.clone()),
            lights: LightState::with_capacity(config.max_lights),
            textures: TextureRegistry::new(),
        }
    }

    /// Apply a host resize to the camera and surface bookkeeping.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport.resize(&mut self.camera, width, height)
    }

    /// Frame view over the current camera, lights and a built render buffer.
    pub fn frame<'a>(&'a self, buffer: &'a RenderBuffer) -> FrameData<'a> {
        FrameData {
            camera: self.camera.uniform(),
            instances: buffer.as_slice(),
            transparent_split: buffer.transparent_split,
            lights: self.lights.as_slice(),
            ambient: self.lights.ambient(),
            surface: self.viewport.surface(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::api::types::SurfaceSize;

    #[test]
    fn new_world_matches_config() {
        let world = World::new(&EngineConfig::default());
        assert_eq!(world.camera.fov_y_degrees, 75.0);
        assert_eq!(world.camera.near, 0.1);
        assert_eq!(world.camera.far, 1000.0);
        assert_eq!(world.camera.position, Vec3::new(0.0, 20.0, 0.0));
        assert_eq!(world.camera.target, Vec3::ZERO);
        assert!((world.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!(world.scene.is_empty());
    }

    #[test]
    fn resize_goes_through_viewport() {
        let mut world = World::new(&EngineConfig::default());
        assert!(world.resize(1920, 1080));
        assert_eq!(world.viewport.surface(), SurfaceSize::new(1920, 1080));
        assert!((world.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
