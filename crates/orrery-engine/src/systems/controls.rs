//! Damped orbit camera controls.
//!
//! The camera circles `target` on a sphere. Pointer drags and wheel events
//! queue rotation/zoom deltas; `update` (once per tick) applies them and, with
//! damping on, lets the remaining delta decay over the following ticks.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3};
use serde::Deserialize;
use crate::api::types::SurfaceSize;
use crate::input::queue::InputEvent;
use crate::renderer::camera::PerspectiveCamera;

/// Keeps the polar angle off the poles.
const POLAR_EPS: f32 = 1e-6;
/// Camera movement below this is not reported as a change.
const CHANGE_EPS: f32 = 1e-6;
/// Zoom factor per wheel notch at `zoom_speed = 1`.
const ZOOM_BASE: f32 = 0.95;

/// Orbit control tuning. Deserializes from JSON; missing fields keep defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub enable_damping: bool,
    /// Fraction of the pending delta applied (and removed) each tick.
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub enable_rotate: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.25,
            enable_zoom: true,
            enable_rotate: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }
}

/// Spherical coordinates around the target. `theta` is the azimuth about +Y
/// measured from +Z, `phi` the polar angle from +Y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

pub struct OrbitControls {
    config: ControlsConfig,
    /// Pending rotation (theta, phi) not yet applied.
    delta: Vec2,
    /// Pending zoom multiplier on the radius.
    scale: f32,
    /// Last pointer position while a drag is in progress.
    drag: Option<Vec2>,
}

impl OrbitControls {
    pub fn new(config: ControlsConfig) -> Self {
        Self {
            config,
            delta: Vec2::ZERO,
            scale: 1.0,
            drag: None,
        }
    }

    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    /// Turn pointer and wheel events into pending rotation/zoom.
    pub fn handle_input<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
        surface: SurfaceSize,
    ) {
        let height = surface.height.max(1) as f32;
        for event in events {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    if self.config.enable_rotate {
                        self.drag = Some(Vec2::new(x, y));
                    }
                }
                InputEvent::PointerUp { .. } => self.drag = None,
                InputEvent::PointerMove { x, y } => {
                    if let Some(start) = self.drag {
                        let end = Vec2::new(x, y);
                        let moved = (end - start) * self.config.rotate_speed;
                        self.rotate_left(TAU * moved.x / height);
                        self.rotate_up(TAU * moved.y / height);
                        self.drag = Some(end);
                    }
                }
                InputEvent::Wheel { delta_y } => {
                    if self.config.enable_zoom {
                        let step = ZOOM_BASE.powf(self.config.zoom_speed);
                        if delta_y < 0.0 {
                            self.scale *= step;
                        } else if delta_y > 0.0 {
                            self.scale /= step;
                        }
                    }
                }
            }
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.x -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.y -= angle;
    }

    /// Apply pending motion to the camera. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let target = camera.target;
        let mut spherical = Spherical::from_offset(camera.position - target);

        let applied = if self.config.enable_damping {
            self.delta * self.config.damping_factor
        } else {
            self.delta
        };
        spherical.theta += applied.x;
        spherical.phi = (spherical.phi + applied.y).clamp(POLAR_EPS, PI - POLAR_EPS);
        spherical.radius = (spherical.radius * self.scale)
            .clamp(self.config.min_distance, self.config.max_distance);

        let previous = camera.position;
        camera.position = target + spherical.to_offset();
        camera.look_at(target);

        if self.config.enable_damping {
            self.delta *= 1.0 - self.config.damping_factor;
        } else {
            self.delta = Vec2::ZERO;
        }
        self.scale = 1.0;

        camera.position.distance_squared(previous) > CHANGE_EPS
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(ControlsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: SurfaceSize = SurfaceSize::new(800, 600);

    fn camera_at(position: Vec3) -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(75.0, 800.0 / 600.0, 0.1, 1000.0);
        cam.position = position;
        cam.look_at(Vec3::ZERO);
        cam
    }

    fn drag(controls: &mut OrbitControls, dx: f32, dy: f32) {
        let events = [
            InputEvent::PointerDown { x: 100.0, y: 100.0 },
            InputEvent::PointerMove { x: 100.0 + dx, y: 100.0 + dy },
            InputEvent::PointerUp { x: 100.0 + dx, y: 100.0 + dy },
        ];
        controls.handle_input(events.iter(), SURFACE);
    }

    #[test]
    fn idle_update_keeps_distance() {
        let mut cam = camera_at(Vec3::new(0.0, 20.0, 0.0));
        let mut controls = OrbitControls::default();
        controls.update(&mut cam);
        assert!((cam.position.length() - 20.0).abs() < 1e-4);
        // Pole is avoided but the camera stays essentially overhead
        assert!(cam.position.y > 19.999);
    }

    #[test]
    fn drag_rotates_camera_around_target() {
        let mut cam = camera_at(Vec3::new(0.0, 10.0, 10.0));
        let mut controls = OrbitControls::default();
        drag(&mut controls, 50.0, 0.0);
        assert!(controls.update(&mut cam));
        assert!((cam.position.length() - 200f32.sqrt()).abs() < 1e-3);
        assert!(cam.position.x < 0.0, "dragging right swings camera toward -X: {:?}", cam.position);
    }

    #[test]
    fn damping_spreads_motion_over_ticks() {
        let mut cam = camera_at(Vec3::new(0.0, 10.0, 10.0));
        let mut controls = OrbitControls::default();
        drag(&mut controls, 60.0, 0.0);

        let x0 = cam.position.x;
        controls.update(&mut cam);
        let x1 = cam.position.x;
        controls.update(&mut cam);
        let x2 = cam.position.x;

        // Still moving on the second tick, but by less
        assert!(x2 < x1 && x1 < x0);
        assert!((x2 - x1).abs() < (x1 - x0).abs());
    }

    #[test]
    fn without_damping_motion_applies_once() {
        let mut cam = camera_at(Vec3::new(0.0, 10.0, 10.0));
        let mut controls = OrbitControls::new(ControlsConfig {
            enable_damping: false,
            ..Default::default()
        });
        drag(&mut controls, 60.0, 0.0);
        assert!(controls.update(&mut cam));
        assert!(!controls.update(&mut cam));
    }

    #[test]
    fn wheel_zooms() {
        let mut cam = camera_at(Vec3::new(0.0, 20.0, 0.0));
        let mut controls = OrbitControls::default();
        controls.handle_input([InputEvent::Wheel { delta_y: -1.0 }].iter(), SURFACE);
        controls.update(&mut cam);
        assert!((cam.position.length() - 19.0).abs() < 1e-3);

        controls.handle_input([InputEvent::Wheel { delta_y: 1.0 }].iter(), SURFACE);
        controls.update(&mut cam);
        assert!((cam.position.length() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn disabled_zoom_and_rotate_ignore_input() {
        let mut cam = camera_at(Vec3::new(0.0, 10.0, 10.0));
        let start = cam.position;
        let mut controls = OrbitControls::new(ControlsConfig {
            enable_zoom: false,
            enable_rotate: false,
            ..Default::default()
        });
        drag(&mut controls, 80.0, 40.0);
        controls.handle_input([InputEvent::Wheel { delta_y: -1.0 }].iter(), SURFACE);
        controls.update(&mut cam);
        assert!(cam.position.abs_diff_eq(start, 1e-4));
        assert!(controls.drag.is_none());
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut cam = camera_at(Vec3::new(0.0, 10.0, 10.0));
        let mut controls = OrbitControls::new(ControlsConfig {
            enable_damping: false,
            ..Default::default()
        });
        controls.rotate_up(10.0);
        controls.update(&mut cam);
        assert!(cam.position.is_finite());
        assert!(cam.position.y > 0.0);
    }

    #[test]
    fn config_from_partial_json() {
        let config: ControlsConfig = serde_json::from_str(r#"{ "damping_factor": 0.1, "max_distance": 50.0 }"#).unwrap();
        assert_eq!(config.damping_factor, 0.1);
        assert_eq!(config.max_distance, 50.0);
        assert!(config.enable_damping);
        assert_eq!(config.zoom_speed, 1.0);
    }
}
