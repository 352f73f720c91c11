//! Shared frame buffer layout.
//! Must stay in sync with the host renderer's `protocol.ts`.
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 20 floats]
//! [Instances: max_instances × 28 floats]
//! [Lights: max_lights × 8 floats]
//! ```
//!
//! Capacities are written into the header once; the host reads them to
//! compute offsets. Counts and the frame counter change every frame.

use crate::api::scenario::EngineConfig;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::RenderInstance;
use crate::renderer::traits::FrameData;
use crate::systems::lighting::PointLight;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
/// `HEADER_LOCK` is 1.0 while a frame is being written and 0.0 once it is
/// complete; a reader on another thread skips the frame while it is set.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_TRANSPARENT_SPLIT: usize = 5;
pub const HEADER_MAX_LIGHTS: usize = 6;
pub const HEADER_LIGHT_COUNT: usize = 7;
pub const HEADER_AMBIENT_R: usize = 8;
pub const HEADER_AMBIENT_G: usize = 9;
pub const HEADER_AMBIENT_B: usize = 10;
pub const HEADER_SURFACE_WIDTH: usize = 11;
pub const HEADER_SURFACE_HEIGHT: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section (wire format, never changes).
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;
/// Floats per render instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;
/// Floats per point light (wire format, never changes).
pub const LIGHT_FLOATS: usize = PointLight::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_lights: usize,

    /// Offset (in floats) where the camera uniform begins.
    pub camera_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_lights: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let light_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let buffer_total_floats = light_data_offset + max_lights * LIGHT_FLOATS;

        Self {
            max_instances,
            max_lights,
            camera_offset,
            instance_data_offset,
            light_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_instances, config.max_lights)
    }
}

/// Packs frames into a flat `f32` buffer laid out per `ProtocolLayout`.
pub struct FrameWriter {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    frame_counter: u32,
}

impl FrameWriter {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut buffer = vec![0.0; layout.buffer_total_floats];
        buffer[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        buffer[HEADER_MAX_INSTANCES] = layout.max_instances as f32;
        buffer[HEADER_MAX_LIGHTS] = layout.max_lights as f32;
        Self {
            layout,
            buffer,
            frame_counter: 0,
        }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// Write one frame. Instances and lights beyond capacity are dropped with a warning.
    pub fn write(&mut self, frame: &FrameData) {
        let instances = clamp_to_capacity(frame.instances, self.layout.max_instances, "instances");
        let lights = clamp_to_capacity(frame.lights, self.layout.max_lights, "lights");
        self.buffer[HEADER_LOCK] = 1.0;

        let cam = &mut self.buffer[self.layout.camera_offset..][..CAMERA_FLOATS];
        cam.copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&frame.camera)));

        let inst_floats: &[f32] = bytemuck::cast_slice(instances);
        self.buffer[self.layout.instance_data_offset..][..inst_floats.len()]
            .copy_from_slice(inst_floats);

        let light_floats: &[f32] = bytemuck::cast_slice(lights);
        self.buffer[self.layout.light_data_offset..][..light_floats.len()]
            .copy_from_slice(light_floats);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        let header = &mut self.buffer[..HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        header[HEADER_INSTANCE_COUNT] = instances.len() as f32;
        header[HEADER_TRANSPARENT_SPLIT] = (frame.transparent_split as usize).min(instances.len()) as f32;
        header[HEADER_LIGHT_COUNT] = lights.len() as f32;
        header[HEADER_AMBIENT_R] = frame.ambient[0];
        header[HEADER_AMBIENT_G] = frame.ambient[1];
        header[HEADER_AMBIENT_B] = frame.ambient[2];
        header[HEADER_SURFACE_WIDTH] = frame.surface.width as f32;
        header[HEADER_SURFACE_HEIGHT] = frame.surface.height as f32;
        header[HEADER_LOCK] = 0.0;
    }

    /// Record a new surface size without waiting for the next frame.
    pub fn set_surface(&mut self, width: u32, height: u32) {
        self.buffer[HEADER_SURFACE_WIDTH] = width as f32;
        self.buffer[HEADER_SURFACE_HEIGHT] = height as f32;
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the buffer for host-side reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }
}

fn clamp_to_capacity<'a, T>(items: &'a [T], max: usize, what: &str) -> &'a [T] {
    if items.len() > max {
        log::warn!("frame has {} {}, capacity is {}; truncating", items.len(), what, max);
        &items[..max]
    } else {
        items
    }
}
