use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// A pivot node and the body it carries.
///
/// The pivot's rotation about Y is the only source of revolution: the body's
/// translation is set once at spawn and never written again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitHandle {
    pub pivot: NodeId,
    pub body: NodeId,
}

impl OrbitHandle {
    /// Advance the pivot's orbital angle.
    pub fn advance_orbit(&self, scene: &mut Scene, delta: f32) {
        if let Some(pivot) = scene.get_mut(self.pivot) {
            pivot.local.rotate_y(delta);
            scene.mark_dirty();
        }
    }

    /// Advance the body's spin about its own axis.
    pub fn advance_spin(&self, scene: &mut Scene, delta: f32) {
        if let Some(body) = scene.get_mut(self.body) {
            body.local.rotate_y(delta);
            scene.mark_dirty();
        }
    }

    /// Current orbital angle in [0, 2π).
    pub fn orbit_angle(&self, scene: &Scene) -> f32 {
        scene.get(self.pivot).map_or(0.0, |n| n.local.rotation.y)
    }

    /// Current spin angle in [0, 2π).
    pub fn spin_angle(&self, scene: &Scene) -> f32 {
        scene.get(self.body).map_or(0.0, |n| n.local.rotation.y)
    }

    /// Distance of the body from its pivot.
    pub fn orbital_radius(&self, scene: &Scene) -> f32 {
        scene.get(self.body).map_or(0.0, |n| n.local.translation.length())
    }
}
