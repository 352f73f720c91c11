use bytemuck::{Pod, Zeroable};

/// Geometry kinds understood by the host renderer.
pub const GEOMETRY_SPHERE: f32 = 0.0;
pub const GEOMETRY_RING: f32 = 1.0;

/// Texture slot value meaning "no texture bound".
pub const NO_TEXTURE: f32 = -1.0;

/// Per-instance render data written to the shared frame buffer.
/// Must match the host protocol: 28 floats = 112 bytes stride.
///
/// Spheres and ellipsoids are drawn as a unit sphere: their radius or axis
/// scale is already folded into `model`. Rings carry their radii in
/// `param_a`/`param_b` instead.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Column-major model matrix (world × geometry scale).
    pub model: [[f32; 4]; 4],
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity (1.0 = opaque).
    pub alpha: f32,
    /// `GEOMETRY_SPHERE` or `GEOMETRY_RING`.
    pub geometry: f32,
    /// Ring inner radius (unused for spheres).
    pub param_a: f32,
    /// Ring outer radius (unused for spheres).
    pub param_b: f32,
    /// Tessellation: ring segments, or sphere width segments.
    pub segments: f32,
    /// Texture slot, or `NO_TEXTURE`.
    pub texture: f32,
    /// 1.0 = ignores scene lights.
    pub unlit: f32,
    /// 0 = front, 1 = back, 2 = double-sided.
    pub side: f32,
    /// Sphere height segments (unused for rings).
    pub height_segments: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 28;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn is_transparent(&self) -> bool {
        self.alpha < 1.0
    }
}

/// Render buffer: opaque instances first, transparent ones after `transparent_split`.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    /// Instances [0..transparent_split) are opaque and drawn first;
    /// instances [transparent_split..] are blended afterwards.
    pub transparent_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            transparent_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.transparent_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn set_transparent_split(&mut self, split: u32) {
        self.transparent_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_slice(&self) -> &[RenderInstance] {
        &self.instances
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
