//! Factories for the entities a scenario composes its scene from.
//!
//! Every orbiting body comes as a pair: a fresh pivot (a root node with no
//! mesh) and the body as the pivot's only child, offset along +X. Rotating
//! the pivot about Y revolves the body; the body's own rotation is its spin.

use std::f32::consts::FRAC_PI_2;
use glam::Vec3;
use crate::api::types::{NodeId, TextureId};
use crate::components::body::BodyDesc;
use crate::components::mesh::{Color, Geometry, Material, MeshComponent, Side};
use crate::components::node::Node;
use crate::components::orbit::OrbitHandle;
use crate::components::ring::OrbitRing;
use crate::core::scene::Scene;

/// Ring tessellation.
pub const RING_SEGMENTS: u32 = 64;
/// Faint grey used for orbit markers.
pub const RING_COLOR: u32 = 0xaaaaaa;
pub const RING_OPACITY: f32 = 0.3;

/// Large inward-facing sphere around the whole scene.
pub fn spawn_backdrop(
    scene: &mut Scene,
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    texture: TextureId,
) -> NodeId {
    let mesh = MeshComponent::new(
        Geometry::sphere(radius, width_segments, height_segments),
        Material::unlit().with_texture(Some(texture)).with_side(Side::Back),
    );
    scene.spawn(Node::new().with_tag("backdrop").with_mesh(mesh))
}

/// A body that does not orbit anything, placed at `desc.offset` along +X.
pub fn spawn_body(scene: &mut Scene, tag: &str, desc: BodyDesc) -> NodeId {
    scene.spawn(
        Node::new()
            .with_tag(tag)
            .with_translation(desc.position())
            .with_mesh(desc.to_mesh()),
    )
}

/// Spawn a pivot at the origin and `desc` as its child.
pub fn spawn_orbiting(scene: &mut Scene, tag: &str, desc: BodyDesc) -> OrbitHandle {
    let pivot = scene.spawn(Node::new().with_tag(format!("{tag}-pivot")));
    let body = scene.spawn_child(
        pivot,
        Node::new()
            .with_tag(tag)
            .with_translation(desc.position())
            .with_mesh(desc.to_mesh()),
    );
    OrbitHandle { pivot, body }
}

/// Lit, textured sphere of `radius` orbiting at `offset`.
pub fn spawn_textured_planet(
    scene: &mut Scene,
    tag: &str,
    radius: f32,
    texture: TextureId,
    offset: f32,
) -> OrbitHandle {
    let desc = BodyDesc::sphere(radius).with_texture(texture).with_offset(offset);
    spawn_orbiting(scene, tag, desc)
}

/// Lit, textured unit sphere scaled by `scale` per axis, orbiting at `offset`.
pub fn spawn_ellipsoid_planet(
    scene: &mut Scene,
    tag: &str,
    scale: Vec3,
    texture: TextureId,
    offset: f32,
) -> OrbitHandle {
    let desc = BodyDesc::ellipsoid(scale).with_texture(texture).with_offset(offset);
    spawn_orbiting(scene, tag, desc)
}

/// Flat ring spanning `radius ± half_width`, rotated into the horizontal plane.
pub fn spawn_orbit_ring(scene: &mut Scene, radius: f32, half_width: f32, label: &str) -> NodeId {
    let ring = OrbitRing::around(radius, half_width, label);
    let mesh = MeshComponent::new(
        Geometry::ring(ring.inner_radius(), ring.outer_radius(), RING_SEGMENTS),
        Material::unlit()
            .with_color(Color::from_hex(RING_COLOR))
            .with_opacity(RING_OPACITY)
            .with_side(Side::Double),
    );
    scene.spawn(
        Node::new()
            .with_tag(format!("{label}-orbit"))
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
            .with_mesh(mesh)
            .with_ring(ring),
    )
}
