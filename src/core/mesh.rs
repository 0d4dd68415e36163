use glam::{Vec2, Vec3};

use super::MeshSink;
use crate::geometries::BufferGeometry;

/// CPU-side triangular polygon mesh.
///
/// Holds its own copy of the buffers last submitted by a generator, so the
/// generator can keep updating without disturbing what this mesh describes.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    name: Option<String>,
    geometry: BufferGeometry,
    revision: u64,
}

impl Mesh {
    /// Creates a new empty mesh with the specified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// The name of this mesh, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The buffers from the latest submission.
    pub fn geometry(&self) -> &BufferGeometry {
        &self.geometry
    }

    /// Number of submissions received so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl MeshSink for Mesh {
    fn submit(&mut self, vertices: &[Vec3], uv: &[Vec2], triangles: &[u32]) {
        self.geometry.vertices.clear();
        self.geometry.vertices.extend_from_slice(vertices);
        self.geometry.uv.clear();
        self.geometry.uv.extend_from_slice(uv);
        self.geometry.triangles.clear();
        self.geometry.triangles.extend_from_slice(triangles);

        self.revision += 1;
    }
}
