pub mod arc;
pub mod spherical;
pub mod vec;

pub use arc::*;
pub use spherical::*;
pub use vec::*;
