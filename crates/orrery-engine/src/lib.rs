pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::scenario::{Scenario, EngineConfig, CameraConfig};
pub use api::types::{NodeId, TextureId, SurfaceSize};
pub use api::error::ConfigError;
pub use components::body::{BodyDesc, BodyShape};
pub use components::mesh::{Color, Geometry, Material, MeshComponent, Shading, Side};
pub use components::node::Node;
pub use components::orbit::OrbitHandle;
pub use components::ring::OrbitRing;
pub use crate::core::driver::AnimationDriver;
pub use crate::core::scene::Scene;
pub use crate::core::transform::{LocalTransform, wrap_angle};
pub use crate::core::world::World;
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::traits::{Renderer, FrameData};
pub use renderer::viewport::{ViewportController, ViewportState};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::registry::{TextureRegistry, TextureState};
pub use bridge::protocol::{ProtocolLayout, FrameWriter};
pub use systems::controls::{OrbitControls, ControlsConfig};
pub use systems::lighting::{PointLight, LightState};
pub use systems::compose::{
    spawn_backdrop, spawn_body, spawn_orbiting,
    spawn_textured_planet, spawn_ellipsoid_planet, spawn_orbit_ring,
};
