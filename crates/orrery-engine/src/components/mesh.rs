use glam::Vec3;
use crate::api::types::TextureId;

/// Minimum segment counts a sphere tessellation accepts.
pub const MIN_WIDTH_SEGMENTS: u32 = 3;
pub const MIN_HEIGHT_SEGMENTS: u32 = 2;

/// Geometry primitive of a mesh node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere { radius: f32, width_segments: u32, height_segments: u32 },
    /// Unit sphere scaled independently along each axis.
    Ellipsoid { scale: Vec3, width_segments: u32, height_segments: u32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32, segments: u32 },
}

impl Geometry {
    /// Sphere with segment counts clamped to the tessellation minimums.
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments: width_segments.max(MIN_WIDTH_SEGMENTS),
            height_segments: height_segments.max(MIN_HEIGHT_SEGMENTS),
        }
    }

    pub fn ellipsoid(scale: Vec3, width_segments: u32, height_segments: u32) -> Self {
        Self::Ellipsoid {
            scale,
            width_segments: width_segments.max(MIN_WIDTH_SEGMENTS),
            height_segments: height_segments.max(MIN_HEIGHT_SEGMENTS),
        }
    }

    pub fn ring(inner: f32, outer: f32, segments: u32) -> Self {
        Self::Ring { inner, outer, segments: segments.max(MIN_WIDTH_SEGMENTS) }
    }

    /// Scale applied to the unit primitive the host renderer draws.
    /// Rings carry their radii as parameters instead, so they stay unscaled.
    pub fn unit_scale(&self) -> Vec3 {
        match *self {
            Geometry::Sphere { radius, .. } => Vec3::splat(radius),
            Geometry::Ellipsoid { scale, .. } => scale,
            Geometry::Ring { .. } => Vec3::ONE,
        }
    }
}

/// RGB color in linear [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Whether a material responds to scene lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Constant brightness (emissive bodies, backdrop, markers).
    Unlit,
    #[default]
    Lit,
}

/// Which faces of the geometry are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Side {
    #[default]
    Front = 0,
    /// Inside faces only, for backdrops viewed from within.
    Back = 1,
    Double = 2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub texture: Option<TextureId>,
    pub color: Color,
    pub opacity: f32,
    pub shading: Shading,
    pub side: Side,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            texture: None,
            color: Color::WHITE,
            opacity: 1.0,
            shading: Shading::Lit,
            side: Side::Front,
        }
    }
}

impl Material {
    pub fn lit() -> Self {
        Self::default()
    }

    pub fn unlit() -> Self {
        Self { shading: Shading::Unlit, ..Default::default() }
    }

    pub fn with_texture(mut self, texture: Option<TextureId>) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Renderable mesh attached to a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_clamps_segments() {
        let g = Geometry::sphere(100.0, 500, 0);
        assert_eq!(
            g,
            Geometry::Sphere { radius: 100.0, width_segments: 500, height_segments: 2 }
        );
    }

    #[test]
    fn unit_scale_per_geometry() {
        assert_eq!(Geometry::sphere(3.0, 32, 32).unit_scale(), Vec3::splat(3.0));
        let scale = Vec3::new(1.0, 0.9, 1.2);
        assert_eq!(Geometry::ellipsoid(scale, 32, 32).unit_scale(), scale);
        assert_eq!(Geometry::ring(1.0, 2.0, 64).unit_scale(), Vec3::ONE);
    }

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex(0x404040);
        assert!((c.r - 64.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn transparency_follows_opacity() {
        assert!(!Material::default().is_transparent());
        assert!(Material::unlit().with_opacity(0.3).is_transparent());
    }
}
