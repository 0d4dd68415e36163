use glam::Vec2;

use super::{BufferGeometry, Geometry};
use crate::error::ShapeError;

/// Parameters of a [`TriangleGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleGeometryOptions {
    /// The bottom-left corner.
    pub left: Vec2,
    /// The bottom-right corner.
    pub right: Vec2,
    /// The top corner.
    pub top: Vec2,
}

impl Default for TriangleGeometryOptions {
    /// Returns the unit triangle: left `(-1, 0)`, right `(1, 0)`, top
    /// `(0, 1)`.
    fn default() -> Self {
        Self {
            left: Vec2::new(-1.0, 0.0),
            right: Vec2::new(1.0, 0.0),
            top: Vec2::new(0.0, 1.0),
        }
    }
}

/// A single triangle: 3 vertices, 1 triangle.
///
/// The corners are not checked for degeneracy; collinear points give a
/// zero-area triangle.
#[derive(Debug, Clone)]
pub struct TriangleGeometry {
    /// The bottom-left corner.
    pub left: Vec2,
    /// The bottom-right corner.
    pub right: Vec2,
    /// The top corner.
    pub top: Vec2,
    buffers: BufferGeometry,
}

impl Default for TriangleGeometry {
    fn default() -> Self {
        Self::from_options(TriangleGeometryOptions::default())
    }
}

impl TriangleGeometry {
    /// Creates a triangle with the given corners.
    pub fn new(left: Vec2, right: Vec2, top: Vec2) -> Self {
        Self::from_options(TriangleGeometryOptions { left, right, top })
    }

    /// Creates a triangle from an options value.
    pub fn from_options(options: TriangleGeometryOptions) -> Self {
        let mut triangle = Self {
            left: options.left,
            right: options.right,
            top: options.top,
            buffers: BufferGeometry::new(3, 1),
        };

        triangle.update();
        triangle
    }

    fn setup_vertices(&mut self) {
        self.buffers.vertices[0] = self.left.extend(0.0);
        self.buffers.vertices[1] = self.right.extend(0.0);
        self.buffers.vertices[2] = self.top.extend(0.0);
    }

    fn setup_uv(&mut self) {
        self.buffers.uv[0] = Vec2::new(0.0, 0.0);
        self.buffers.uv[1] = Vec2::new(1.0, 0.0);
        self.buffers.uv[2] = Vec2::new(1.0, 1.0);
    }

    fn setup_triangles(&mut self) {
        self.buffers.triangles.copy_from_slice(&[0, 2, 1]);
    }
}

impl Geometry for TriangleGeometry {
    fn update(&mut self) {
        self.setup_vertices();
        self.setup_uv();
        self.setup_triangles();
    }

    fn buffers(&self) -> &BufferGeometry {
        &self.buffers
    }

    fn set_vertex_direct(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError> {
        tracing::warn!(index, "Triangle vertex written directly, bypassing update");
        self.buffers.set_vertex(index, point)
    }
}
