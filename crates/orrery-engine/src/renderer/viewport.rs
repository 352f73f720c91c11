use crate::api::types::SurfaceSize;
use crate::renderer::camera::PerspectiveCamera;

/// Whether the camera projection matches the current surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportState {
    Normal,
    /// A resize arrived and the projection has not been recomputed yet.
    Stale,
}

/// Keeps the camera projection and render surface in step with the host viewport.
///
/// Every resize is handled fully and synchronously: `Stale` never outlives
/// the call to `resize`.
#[derive(Debug, Clone)]
pub struct ViewportController {
    surface: SurfaceSize,
    state: ViewportState,
}

impl ViewportController {
    pub fn new(surface: SurfaceSize) -> Self {
        Self { surface, state: ViewportState::Normal }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Point the camera's aspect at the current surface. Used once at startup.
    pub fn sync_camera(&self, camera: &mut PerspectiveCamera) {
        if !self.surface.is_empty() {
            camera.aspect = self.surface.aspect();
            camera.update_projection();
        }
    }

    /// Apply a host resize. Returns false (and changes nothing) when either
    /// dimension is zero.
    pub fn resize(&mut self, camera: &mut PerspectiveCamera, width: u32, height: u32) -> bool {
        let size = SurfaceSize::new(width, height);
        if size.is_empty() {
            log::warn!("ignoring resize to {}x{}", width, height);
            return false;
        }

        self.state = ViewportState::Stale;
        camera.aspect = size.aspect();
        camera.update_projection();
        self.surface = size;
        self.state = ViewportState::Normal;

        log::debug!("viewport resized to {}x{} (aspect {:.4})", width, height, camera.aspect);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 800.0 / 600.0, 0.1, 1000.0)
    }

    #[test]
    fn resize_updates_aspect_and_surface() {
        let mut cam = camera();
        let mut vp = ViewportController::new(SurfaceSize::new(800, 600));
        assert!((cam.aspect - 1.3333334).abs() < 1e-5);

        assert!(vp.resize(&mut cam, 1920, 1080));
        assert!((cam.aspect - 1.7777778).abs() < 1e-5);
        assert_eq!(vp.surface(), SurfaceSize::new(1920, 1080));
        assert_eq!(vp.state(), ViewportState::Normal);
    }

    #[test]
    fn resize_recomputes_projection() {
        let mut cam = camera();
        let mut vp = ViewportController::new(SurfaceSize::new(800, 600));
        vp.resize(&mut cam, 1920, 1080);
        let mut expected = camera();
        expected.aspect = 1920.0 / 1080.0;
        expected.update_projection();
        assert_eq!(cam.projection_matrix(), expected.projection_matrix());
    }

    #[test]
    fn resize_is_idempotent() {
        let mut cam = camera();
        let mut vp = ViewportController::new(SurfaceSize::new(800, 600));
        vp.resize(&mut cam, 1024, 768);
        let (aspect, proj, surface) = (cam.aspect, cam.projection_matrix(), vp.surface());
        vp.resize(&mut cam, 1024, 768);
        assert_eq!(cam.aspect, aspect);
        assert_eq!(cam.projection_matrix(), proj);
        assert_eq!(vp.surface(), surface);
    }

    #[test]
    fn aspect_matches_every_resize() {
        let mut cam = camera();
        let mut vp = ViewportController::new(SurfaceSize::new(800, 600));
        for (w, h) in [(1, 1), (640, 480), (375, 812), (3840, 1600)] {
            vp.resize(&mut cam, w, h);
            assert_eq!(cam.aspect, w as f32 / h as f32);
        }
    }

    #[test]
    fn zero_height_is_ignored() {
        let mut cam = camera();
        let mut vp = ViewportController::new(SurfaceSize::new(800, 600));
        assert!(!vp.resize(&mut cam, 800, 0));
        assert_eq!(vp.surface(), SurfaceSize::new(800, 600));
        assert!(cam.aspect.is_finite());
    }
}
