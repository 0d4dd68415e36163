use glam::{Vec2, Vec3};

use super::BufferGeometry;
use crate::{core::MeshSink, error::ShapeError};

/// Generator of 2D mesh buffers. Implemented by every shape.
///
/// A generator owns a [`BufferGeometry`] and rewrites it in place whenever
/// [`update`](Self::update) is called. Read the result through
/// [`vertices`](Self::vertices), [`uv`](Self::uv) and
/// [`triangles`](Self::triangles), or forward it to a [`MeshSink`] with
/// [`submit`](Self::submit).
pub trait Geometry {
    /// Recomputes the buffers from the current parameters: vertices first,
    /// then UVs, then triangles. Later steps may read what earlier steps
    /// wrote. Buffer lengths never change here.
    fn update(&mut self);

    /// The generated buffers.
    fn buffers(&self) -> &BufferGeometry;

    /// Overwrites the vertex at `index` with `point` without recomputing the
    /// UV or index buffers.
    ///
    /// This bypasses [`update`](Self::update): the UVs keep describing the
    /// old position, and the next `update` discards the change.
    fn set_vertex_direct(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError>;

    /// The position buffer.
    fn vertices(&self) -> &[Vec3] {
        &self.buffers().vertices
    }

    /// The UV buffer.
    fn uv(&self) -> &[Vec2] {
        &self.buffers().uv
    }

    /// The triangle index buffer.
    fn triangles(&self) -> &[u32] {
        &self.buffers().triangles
    }

    /// Number of triangles in the index buffer.
    fn triangle_count(&self) -> usize {
        self.buffers().triangle_count()
    }

    /// Hands the current buffers to `sink`.
    fn submit(&self, sink: &mut dyn MeshSink) {
        let buffers = self.buffers();
        sink.submit(&buffers.vertices, &buffers.uv, &buffers.triangles);
    }
}
