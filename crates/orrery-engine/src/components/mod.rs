pub mod body;
pub mod mesh;
pub mod node;
pub mod orbit;
pub mod ring;
