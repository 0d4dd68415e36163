//! WebGPU Abstraction Layer (WGPUAL).
//!
//! Uploads generated meshes to the GPU so the host renderer only has to bind
//! the buffers and draw.

mod gpu;
mod gpu_mesh;

pub use gpu::*;
pub use gpu_mesh::*;
