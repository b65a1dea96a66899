pub mod arrow;
pub mod arrows;
pub mod mesh;
pub mod picking;

pub use arrows::*;
