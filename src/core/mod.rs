//! The host-facing side of the crate: where generated buffers end up.

mod mesh;
mod sink;

pub use mesh::*;
pub use sink::*;
