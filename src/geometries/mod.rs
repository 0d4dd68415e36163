//! Shape generators and the buffers they fill.

mod buffer_geometry;
mod circle;
mod geometry;
mod line;
mod ring;
mod triangle;

pub use buffer_geometry::*;
pub use circle::*;
pub use geometry::*;
pub use line::*;
pub use ring::*;
pub use triangle::*;
