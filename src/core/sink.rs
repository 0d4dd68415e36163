use glam::{Vec2, Vec3};

/// Receiver of generated mesh buffers, typically a mesh resource owned by a
/// renderer.
///
/// Generators push their buffers into a sink with
/// [`Geometry::submit`](crate::Geometry::submit). A sink copies what it needs
/// and never writes back into the generator.
pub trait MeshSink {
    /// Receives a complete set of buffers. `triangles` holds one clockwise
    /// triangle per consecutive index triplet.
    fn submit(&mut self, vertices: &[Vec3], uv: &[Vec2], triangles: &[u32]);
}
