use glam::Vec2;

use super::{BufferGeometry, Geometry};
use crate::error::ShapeError;

/// Parameters of a [`LineGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineGeometryOptions {
    /// One endpoint of the segment.
    pub start: Vec2,
    /// The other endpoint of the segment.
    pub end: Vec2,
    /// Width of the stroke. `0.0` collapses the quad to a zero-width strip.
    pub thickness: f32,
}

impl Default for LineGeometryOptions {
    /// Returns a unit-length vertical segment from `(0, 0)` to `(0, 1)` with
    /// a thickness of `0.1`.
    fn default() -> Self {
        Self {
            start: Vec2::ZERO,
            end: Vec2::Y,
            thickness: 0.1,
        }
    }
}

/// A stroked line segment, meshed as a thin quad: 4 vertices, 2 triangles.
///
/// Every [`update`](Geometry::update) first makes sure `start` is the higher
/// endpoint (greater or equal y), swapping the two fields if needed, so the
/// winding does not depend on which end the caller labels `start`.
#[derive(Debug, Clone)]
pub struct LineGeometry {
    /// The start point. After an update this is the higher endpoint.
    pub start: Vec2,
    /// The end point. After an update this is the lower endpoint.
    pub end: Vec2,
    /// Width of the stroke.
    pub thickness: f32,
    buffers: BufferGeometry,
}

impl Default for LineGeometry {
    fn default() -> Self {
        Self::from_options(LineGeometryOptions::default())
    }
}

impl LineGeometry {
    /// Creates a line from `start` to `end` with the given thickness.
    pub fn new(start: Vec2, end: Vec2, thickness: f32) -> Self {
        Self::from_options(LineGeometryOptions {
            start,
            end,
            thickness,
        })
    }

    /// Creates a line from an options value.
    pub fn from_options(options: LineGeometryOptions) -> Self {
        let mut line = Self {
            start: options.start,
            end: options.end,
            thickness: options.thickness,
            buffers: BufferGeometry::new(4, 2),
        };

        line.update();
        line
    }

    /// Swaps the endpoints when `start` lies below `end`.
    fn orientate(&mut self) {
        if self.start.y < self.end.y {
            std::mem::swap(&mut self.start, &mut self.end);
        }
    }

    fn setup_vertices(&mut self) {
        self.orientate();

        let half_thickness = self.thickness / 2.0;
        let direction = (self.start - self.end).normalize_or_zero();

        // Offsets follow the tangent of the direction components rather than
        // the true normal; existing meshes depend on this shape.
        let offset = Vec2::new(
            half_thickness * direction.y.tan(),
            half_thickness * direction.x.tan(),
        );
        let left = Vec2::new(-offset.x, offset.y);
        let right = Vec2::new(offset.x, -offset.y);

        self.buffers.vertices[0] = (self.start + left).extend(0.0);
        self.buffers.vertices[1] = (self.start + right).extend(0.0);
        self.buffers.vertices[2] = (self.end + left).extend(0.0);
        self.buffers.vertices[3] = (self.end + right).extend(0.0);
    }

    fn setup_uv(&mut self) {
        self.buffers.uv[0] = Vec2::new(0.0, 1.0);
        self.buffers.uv[1] = Vec2::new(1.0, 1.0);
        self.buffers.uv[2] = Vec2::new(0.0, 0.0);
        self.buffers.uv[3] = Vec2::new(0.0, 1.0);
    }

    fn setup_triangles(&mut self) {
        self.buffers.triangles.copy_from_slice(&[0, 1, 2, 2, 1, 3]);
    }
}

impl Geometry for LineGeometry {
    fn update(&mut self) {
        tracing::trace!(start = ?self.start, end = ?self.end, "Updating line geometry");

        self.setup_vertices();
        self.setup_uv();
        self.setup_triangles();
    }

    fn buffers(&self) -> &BufferGeometry {
        &self.buffers
    }

    fn set_vertex_direct(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError> {
        tracing::warn!(index, "Line vertex written directly, bypassing update");
        self.buffers.set_vertex(index, point)
    }
}
