use glam::Mat4;
use crate::assets::registry::TextureRegistry;
use crate::components::mesh::{Geometry, MeshComponent, Shading};
use crate::components::node::Node;
use crate::renderer::instance::{
    RenderBuffer, RenderInstance, GEOMETRY_RING, GEOMETRY_SPHERE, NO_TEXTURE,
};

/// Build the render buffer from the scene's visible mesh nodes.
/// Opaque instances come first, then transparent ones; `transparent_split`
/// marks the boundary. Textures that are not ready pack as `NO_TEXTURE`.
pub fn build_render_buffer<'a>(
    nodes: impl Iterator<Item = &'a Node>,
    textures: &TextureRegistry,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let mut transparent: Vec<RenderInstance> = Vec::new();

    for node in nodes {
        if !node.visible {
            continue;
        }
        let Some(mesh) = &node.mesh else { continue };

        let instance = pack_instance(node.world, mesh, textures);
        if instance.is_transparent() {
            transparent.push(instance);
        } else {
            buffer.push(instance);
        }
    }

    buffer.set_transparent_split(buffer.instance_count());
    for inst in transparent {
        buffer.push(inst);
    }
}

fn pack_instance(world: Mat4, mesh: &MeshComponent, textures: &TextureRegistry) -> RenderInstance {
    let model = world * Mat4::from_scale(mesh.geometry.unit_scale());
    let material = &mesh.material;

    let (geometry, param_a, param_b, segments, height_segments) = match mesh.geometry {
        Geometry::Sphere { width_segments, height_segments, .. }
        | Geometry::Ellipsoid { width_segments, height_segments, .. } => {
            (GEOMETRY_SPHERE, 0.0, 0.0, width_segments as f32, height_segments as f32)
        }
        Geometry::Ring { inner, outer, segments } => {
            (GEOMETRY_RING, inner, outer, segments as f32, 0.0)
        }
    };

    let texture = material
        .texture
        .and_then(|id| textures.resolve(id))
        .map_or(NO_TEXTURE, |id| id.0 as f32);

    RenderInstance {
        model: model.to_cols_array_2d(),
        r: material.color.r,
        g: material.color.g,
        b: material.color.b,
        alpha: material.opacity,
        geometry,
        param_a,
        param_b,
        segments,
        texture,
        unlit: if material.shading == Shading::Unlit { 1.0 } else { 0.0 },
        side: material.side as u8 as f32,
        height_segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::components::mesh::{Material, Side};
    use crate::core::scene::Scene;

    fn sphere(radius: f32, material: Material) -> Node {
        Node::new().with_mesh(MeshComponent::new(Geometry::sphere(radius, 32, 32), material))
    }

    #[test]
    fn transparent_instances_go_last() {
        let mut scene = Scene::new();
        scene.spawn(Node::new().with_mesh(MeshComponent::new(
            Geometry::ring(8.45, 8.55, 64),
            Material::unlit().with_opacity(0.3).with_side(Side::Double),
        )));
        scene.spawn(sphere(3.0, Material::unlit()));
        scene.spawn(sphere(1.0, Material::lit()));
        scene.mark_dirty();
        scene.propagate();

        let mut buffer = RenderBuffer::new();
        build_render_buffer(scene.iter(), &TextureRegistry::new(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.transparent_split, 2);
        let ring = buffer.instances[2];
        assert_eq!(ring.geometry, GEOMETRY_RING);
        assert_eq!((ring.param_a, ring.param_b), (8.45, 8.55));
        assert_eq!(ring.side, 2.0);
    }

    #[test]
    fn anchors_and_hidden_nodes_are_skipped() {
        let mut scene = Scene::new();
        scene.spawn(Node::new());
        let hidden = scene.spawn(sphere(1.0, Material::lit()));
        scene.get_mut(hidden).unwrap().visible = false;

        let mut buffer = RenderBuffer::new();
        build_render_buffer(scene.iter(), &TextureRegistry::new(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn radius_is_folded_into_model() {
        let mut scene = Scene::new();
        scene.spawn(sphere(3.0, Material::unlit()).with_translation(Vec3::new(1.0, 0.0, 0.0)));
        scene.propagate();

        let mut buffer = RenderBuffer::new();
        build_render_buffer(scene.iter(), &TextureRegistry::new(), &mut buffer);
        let model = Mat4::from_cols_array_2d(&buffer.instances[0].model);
        let edge = model.transform_point3(Vec3::X);
        assert!(edge.abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-6));
        assert_eq!(buffer.instances[0].unlit, 1.0);
    }

    #[test]
    fn texture_packs_only_when_ready() {
        let mut textures = TextureRegistry::new();
        let ready = textures.load("textures/earth.jpg");
        let failed = textures.load("textures/missing.jpg");
        let pending = textures.load("textures/sun.jpg");
        textures.mark_loaded(ready, true);
        textures.mark_loaded(failed, false);

        let mut scene = Scene::new();
        for id in [ready, failed, pending] {
            scene.spawn(sphere(1.0, Material::lit().with_texture(Some(id))));
        }
        scene.propagate();

        let mut buffer = RenderBuffer::new();
        build_render_buffer(scene.iter(), &textures, &mut buffer);
        let slots: Vec<f32> = buffer.instances.iter().map(|i| i.texture).collect();
        assert_eq!(slots, vec![ready.0 as f32, NO_TEXTURE, NO_TEXTURE]);
    }
}
