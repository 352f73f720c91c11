//! Renderer trait: the seam between the engine and a GPU backend.
//!
//! In the browser the "renderer" on the Rust side only packs each frame into
//! the shared buffer (see `bridge::protocol::FrameWriter`); the actual draw
//! happens in the host's WebGPU/WebGL code. Native backends implement the
//! same trait and consume `FrameData` directly.

use super::camera::CameraUniform;
use super::instance::RenderInstance;
use crate::api::types::SurfaceSize;
use crate::systems::lighting::PointLight;

/// Everything needed to draw one frame.
pub struct FrameData<'a> {
    pub camera: CameraUniform,
    /// Opaque instances first, then transparent from `transparent_split`.
    pub instances: &'a [RenderInstance],
    pub transparent_split: u32,
    pub lights: &'a [PointLight],
    /// Ambient RGB, premultiplied by intensity.
    pub ambient: [f32; 3],
    pub surface: SurfaceSize,
}

/// Renderer trait for GPU backends.
///
/// ```ignore
/// struct WgpuRenderer { /* device, queue, surface ... */ }
///
/// impl Renderer for WgpuRenderer {
///     fn backend(&self) -> &'static str { "wgpu" }
///     fn draw(&mut self, frame: &FrameData) { /* encode passes */ }
///     fn resize(&mut self, width: u32, height: u32) { /* reconfigure surface */ }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g. "shared-buffer", "wgpu").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Resize the render surface to (width, height) pixels.
    fn resize(&mut self, width: u32, height: u32);
}
