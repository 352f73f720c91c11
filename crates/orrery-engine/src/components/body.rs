use glam::Vec3;
use crate::api::types::TextureId;
use crate::components::mesh::{Geometry, Material, MeshComponent};

/// Tessellation used for every body.
pub const BODY_SEGMENTS: u32 = 32;

/// Shape of a body's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    Sphere { radius: f32 },
    /// Unit sphere scaled by independent X/Y/Z factors.
    Ellipsoid { scale: Vec3 },
}

impl BodyShape {
    pub fn is_valid(&self) -> bool {
        match *self {
            BodyShape::Sphere { radius } => radius > 0.0 && radius.is_finite(),
            BodyShape::Ellipsoid { scale } => scale.min_element() > 0.0 && scale.is_finite(),
        }
    }
}

/// Description of a body to spawn.
///
/// ```ignore
/// let earth = BodyDesc::sphere(1.0).with_texture(earth_tex).with_offset(8.5);
/// let sun = BodyDesc::sphere(3.0).with_texture(sun_tex).emissive();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    pub shape: BodyShape,
    pub texture: Option<TextureId>,
    /// Unlit when true; ignores scene lights.
    pub emissive: bool,
    /// Distance from the owning pivot (or origin) along +X.
    pub offset: f32,
}

impl BodyDesc {
    pub fn sphere(radius: f32) -> Self {
        Self::from_shape(BodyShape::Sphere { radius })
    }

    pub fn ellipsoid(scale: Vec3) -> Self {
        Self::from_shape(BodyShape::Ellipsoid { scale })
    }

    fn from_shape(shape: BodyShape) -> Self {
        debug_assert!(shape.is_valid(), "body dimensions must be positive and finite: {shape:?}");
        Self {
            shape,
            texture: None,
            emissive: false,
            offset: 0.0,
        }
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn emissive(mut self) -> Self {
        self.emissive = true;
        self
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.offset, 0.0, 0.0)
    }

    pub fn to_mesh(&self) -> MeshComponent {
        let geometry = match self.shape {
            BodyShape::Sphere { radius } => Geometry::sphere(radius, BODY_SEGMENTS, BODY_SEGMENTS),
            BodyShape::Ellipsoid { scale } => Geometry::ellipsoid(scale, BODY_SEGMENTS, BODY_SEGMENTS),
        };
        let material = if self.emissive { Material::unlit() } else { Material::lit() };
        MeshComponent::new(geometry, material.with_texture(self.texture))
    }
}
