use std::f32::consts::TAU;

use glam::Vec2;

use super::{BufferGeometry, Geometry};
use crate::error::{validate_radius, validate_steps, validate_thickness, ShapeError};

/// Parameters of a [`RingGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingGeometryOptions {
    /// Number of samples on each of the two rings. Must be at least `3`.
    pub steps: u32,
    /// Radius of the inner ring. Must be greater than `0.0`.
    pub radius: f32,
    /// Distance from the inner ring to the outer ring. Must not be negative.
    pub thickness: f32,
}

impl Default for RingGeometryOptions {
    fn default() -> Self {
        Self {
            steps: 5,
            radius: 1.0,
            thickness: 1.0,
        }
    }
}

/// Outline of a circle: a closed strip of triangles between an inner ring of
/// radius `radius` and an outer ring of radius `radius + thickness`.
///
/// Produces `2 * steps` vertices, alternating inner and outer samples (vertex
/// `2i` is inner sample `i`, vertex `2i + 1` is outer sample `i`), and
/// `2 * steps` triangles. Samples are placed with `x = sin(angle)` and
/// `y = cos(angle)`, starting one increment past angle `0`.
///
/// UVs map the outer diameter onto the unit square.
#[derive(Debug, Clone)]
pub struct RingGeometry {
    steps: u32,
    radius: f32,
    thickness: f32,
    buffers: BufferGeometry,
}

impl Default for RingGeometry {
    fn default() -> Self {
        let options = RingGeometryOptions::default();

        let mut ring = Self {
            steps: options.steps,
            radius: options.radius,
            thickness: options.thickness,
            buffers: Self::allocate(options.steps),
        };

        ring.update();
        ring
    }
}

impl RingGeometry {
    /// Creates a ring with `steps` samples per ring.
    ///
    /// Returns [`ShapeError::InvalidParameter`] if `steps < 3`, the radius is
    /// not a finite positive number, or the thickness is negative or not
    /// finite.
    pub fn new(steps: u32, radius: f32, thickness: f32) -> Result<Self, ShapeError> {
        Self::from_options(RingGeometryOptions {
            steps,
            radius,
            thickness,
        })
    }

    /// Creates a ring from an options value.
    pub fn from_options(options: RingGeometryOptions) -> Result<Self, ShapeError> {
        validate_steps(options.steps)?;
        validate_radius(options.radius)?;
        validate_thickness(options.thickness)?;

        let mut ring = Self {
            steps: options.steps,
            radius: options.radius,
            thickness: options.thickness,
            buffers: Self::allocate(options.steps),
        };

        tracing::debug!(
            steps = ring.steps,
            radius = ring.radius,
            thickness = ring.thickness,
            "Created ring geometry"
        );

        ring.update();
        Ok(ring)
    }

    /// The number of samples per ring.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// The inner radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The distance between the inner and outer rings.
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// The radius of the outer ring.
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.thickness
    }

    /// Sets the inner radius. Takes effect on the next
    /// [`update`](Geometry::update).
    pub fn set_radius(&mut self, radius: f32) -> Result<(), ShapeError> {
        validate_radius(radius)?;
        self.radius = radius;

        Ok(())
    }

    /// Sets the thickness. Takes effect on the next
    /// [`update`](Geometry::update).
    pub fn set_thickness(&mut self, thickness: f32) -> Result<(), ShapeError> {
        validate_thickness(thickness)?;
        self.thickness = thickness;

        Ok(())
    }

    /// Changes the number of samples per ring, reallocating the buffers and
    /// regenerating the mesh.
    pub fn set_steps(&mut self, steps: u32) -> Result<(), ShapeError> {
        validate_steps(steps)?;

        tracing::debug!(from = self.steps, to = steps, "Resizing ring geometry");

        self.steps = steps;
        let count = steps as usize * 2;
        self.buffers.resize(count, count);
        self.update();

        Ok(())
    }

    fn allocate(steps: u32) -> BufferGeometry {
        let count = steps as usize * 2;
        BufferGeometry::new(count, count)
    }

    fn setup_vertices(&mut self) {
        let increment = TAU / self.steps as f32;
        let outer_radius = self.outer_radius();

        for (i, pair) in self.buffers.vertices.chunks_exact_mut(2).enumerate() {
            let (sin, cos) = (increment * (i + 1) as f32).sin_cos();
            let direction = Vec2::new(sin, cos);

            pair[0] = (direction * self.radius).extend(0.0);
            pair[1] = (direction * outer_radius).extend(0.0);
        }
    }

    fn setup_uv(&mut self) {
        let diameter = self.outer_radius() * 2.0;

        for (uv, vertex) in self.buffers.uv.iter_mut().zip(&self.buffers.vertices) {
            *uv = vertex.truncate() / diameter + Vec2::splat(0.5);
        }
    }

    fn setup_triangles(&mut self) {
        let vertex_count = self.buffers.vertices.len() as u32;
        let triangles = &mut self.buffers.triangles;
        let closing = triangles.len() - 6;

        // The two triangles joining the last inner/outer pair back to the
        // first one.
        triangles[closing..].copy_from_slice(&[
            0,
            vertex_count - 2,
            vertex_count - 1,
            1,
            0,
            vertex_count - 1,
        ]);

        // Inner and outer samples alternate, so the winding flips with the
        // parity of the first index to stay clockwise.
        for (i, triangle) in triangles[..closing].chunks_exact_mut(3).enumerate() {
            let i = i as u32;

            if i % 2 == 0 {
                triangle.copy_from_slice(&[i + 1, i + 2, i]);
            } else {
                triangle.copy_from_slice(&[i, i + 2, i + 1]);
            }
        }
    }
}

impl Geometry for RingGeometry {
    fn update(&mut self) {
        tracing::trace!(steps = self.steps, "Updating ring geometry");

        self.setup_vertices();
        self.setup_uv();
        self.setup_triangles();
    }

    fn buffers(&self) -> &BufferGeometry {
        &self.buffers
    }

    fn set_vertex_direct(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError> {
        tracing::warn!(index, "Ring vertex written directly, bypassing update");
        self.buffers.set_vertex(index, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_alternates_winding_by_parity() {
        let ring = RingGeometry::new(3, 1.0, 1.0).unwrap();

        assert_eq!(
            ring.triangles(),
            &[1, 2, 0, 1, 3, 2, 3, 4, 2, 3, 5, 4, 0, 4, 5, 1, 0, 5]
        );
    }

    #[test]
    fn default_matches_default_options() {
        let ring = RingGeometry::default();
        let options = RingGeometryOptions::default();

        assert_eq!(ring.steps(), options.steps);
        assert_eq!(ring.radius(), options.radius);
        assert_eq!(ring.thickness(), options.thickness);
        assert_eq!(ring.vertices().len(), 10);
    }
}
