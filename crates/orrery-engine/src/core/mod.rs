pub mod driver;
pub mod scene;
pub mod transform;
pub mod world;
