use glam::Vec3;
use orrery_engine::*;

use crate::config::OrbitSceneConfig;

/// Handles the per-tick update needs from the composed scene.
#[derive(Debug, Clone, Copy)]
pub struct Composed {
    pub planet: OrbitHandle,
    pub star: NodeId,
    pub backdrop: NodeId,
    pub ring: NodeId,
}

/// Build the backdrop, star, orbiting planet, its ring and the lights.
pub fn compose(world: &mut World, config: &OrbitSceneConfig) -> Composed {
    let bg = world.textures.load(&config.backdrop.texture);
    let star_tex = world.textures.load(&config.star.texture);
    let planet_tex = world.textures.load(&config.planet.texture);

    let backdrop = spawn_backdrop(
        &mut world.scene,
        config.backdrop.radius,
        config.backdrop.width_segments,
        config.backdrop.height_segments,
        bg,
    );

    let star = spawn_body(
        &mut world.scene,
        "sun",
        BodyDesc::sphere(config.star.radius)
            .with_texture(star_tex)
            .with_offset(config.star.offset)
            .emissive(),
    );

    let planet_cfg = &config.planet;
    let orbital_radius = planet_cfg.orbital_radius();
    let planet = spawn_textured_planet(
        &mut world.scene,
        &planet_cfg.name,
        planet_cfg.radius,
        planet_tex,
        orbital_radius,
    );
    let ring = spawn_orbit_ring(
        &mut world.scene,
        orbital_radius,
        planet_cfg.ring_half_width,
        &planet_cfg.name,
    );

    let lights = &config.lights;
    world.lights.add(PointLight::new(
        Vec3::ZERO,
        Color::from_hex(lights.point_color),
        lights.point_intensity,
        lights.point_range,
    ));
    world
        .lights
        .set_ambient(Color::from_hex(lights.ambient_color), lights.ambient_intensity);

    log::debug!("composed {} orbiting at {:.2}", planet_cfg.name, orbital_radius);

    Composed {
        planet,
        star,
        backdrop,
        ring,
    }
}
