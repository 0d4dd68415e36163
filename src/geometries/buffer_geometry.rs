use glam::{Vec2, Vec3};

use crate::error::ShapeError;

/// Shape of a triangular polygon 2D mesh with compiled buffer data.
///
/// The buffers are sized once, when the owning generator is built, and are
/// then overwritten in place. Their lengths only change through
/// [`resize`](Self::resize).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferGeometry {
    /// Position buffer. Every vertex lies in the XY plane, i.e. `z == 0.0`.
    pub vertices: Vec<Vec3>,
    /// UV buffer. Holds the texture coordinates of the corresponding vertex
    /// in [`vertices`](Self::vertices).
    pub uv: Vec<Vec2>,
    /// List of indices. Every consecutive triplet defines one clockwise
    /// triangle formed by the vertices at the specified indices.
    pub triangles: Vec<u32>,
}

impl BufferGeometry {
    /// Creates zero-filled buffers for `vertex_count` vertices and
    /// `triangle_count` triangles.
    pub fn new(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: vec![Vec3::ZERO; vertex_count],
            uv: vec![Vec2::ZERO; vertex_count],
            triangles: vec![0; triangle_count * 3],
        }
    }

    /// Reallocates the buffers to hold `vertex_count` vertices and
    /// `triangle_count` triangles. New slots are zero-filled.
    pub fn resize(&mut self, vertex_count: usize, triangle_count: usize) {
        self.vertices.resize(vertex_count, Vec3::ZERO);
        self.uv.resize(vertex_count, Vec2::ZERO);
        self.triangles.resize(triangle_count * 3, 0);
    }

    /// Number of triangles described by the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Overwrites a single vertex with `point` (z forced to `0.0`), leaving
    /// the UV and index buffers untouched.
    pub(crate) fn set_vertex(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError> {
        let len = self.vertices.len();
        let vertex = self
            .vertices
            .get_mut(index)
            .ok_or(ShapeError::VertexOutOfRange { index, len })?;

        *vertex = point.extend(0.0);

        Ok(())
    }

    /// The position buffer as raw bytes, ready for a GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The UV buffer as raw bytes, ready for a GPU upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uv)
    }

    /// The index buffer as raw bytes, ready for a GPU upload.
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}
