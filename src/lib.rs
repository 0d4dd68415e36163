//! Procedural 2D mesh generators.
//!
//! Every generator implements [`Geometry`]: it owns a vertex buffer, a UV
//! buffer and a triangle index buffer, and rewrites them in place whenever
//! [`Geometry::update`] is called. The buffers can be read directly or
//! handed to a [`MeshSink`] such as [`Mesh`] or [`GpuMesh`].

mod core;
mod error;
mod geometries;
mod wgpual;

pub use self::core::*;
pub use error::*;
pub use geometries::*;
pub use wgpual::*;

// glam re-exports
pub use glam::{Vec2, Vec3};

// wgpu re-exports
pub use wgpu::PowerPreference;
