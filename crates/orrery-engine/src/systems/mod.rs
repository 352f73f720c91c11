pub mod compose;
pub mod controls;
pub mod lighting;
pub mod render;
