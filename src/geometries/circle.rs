use std::f32::consts::TAU;

use glam::Vec2;

use super::{BufferGeometry, Geometry};
use crate::error::{validate_radius, validate_steps, ShapeError};

/// Parameters of a [`CircleGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleGeometryOptions {
    /// Radius of the disk. Must be greater than `0.0`.
    pub radius: f32,
    /// Number of samples on the perimeter. Must be at least `3`.
    pub steps: u32,
}

impl Default for CircleGeometryOptions {
    /// Returns a unit disk sampled at 32 points.
    fn default() -> Self {
        Self {
            radius: 1.0,
            steps: 32,
        }
    }
}

/// A filled disk centered at the origin, triangulated as a fan from the first
/// perimeter vertex.
///
/// Produces `steps` vertices and `steps - 2` triangles. The first sample sits
/// one angular increment past angle `0`, so the last sample lands on angle
/// `2π`.
#[derive(Debug, Clone)]
pub struct CircleGeometry {
    radius: f32,
    steps: u32,
    buffers: BufferGeometry,
}

impl CircleGeometry {
    /// Creates a disk of the given radius sampled at `steps` points.
    ///
    /// Returns [`ShapeError::InvalidParameter`] if `steps < 3` or the radius
    /// is not a finite positive number.
    pub fn new(radius: f32, steps: u32) -> Result<Self, ShapeError> {
        Self::from_options(CircleGeometryOptions { radius, steps })
    }

    /// Creates a disk from an options value.
    pub fn from_options(options: CircleGeometryOptions) -> Result<Self, ShapeError> {
        validate_radius(options.radius)?;
        validate_steps(options.steps)?;

        let mut circle = Self {
            radius: options.radius,
            steps: options.steps,
            buffers: Self::allocate(options.steps),
        };

        tracing::debug!(
            radius = circle.radius,
            steps = circle.steps,
            "Created circle geometry"
        );

        circle.update();
        Ok(circle)
    }

    /// The disk radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The number of perimeter samples.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Sets the radius. Takes effect on the next [`update`](Geometry::update).
    pub fn set_radius(&mut self, radius: f32) -> Result<(), ShapeError> {
        validate_radius(radius)?;
        self.radius = radius;

        Ok(())
    }

    /// Changes the number of perimeter samples, reallocating the buffers and
    /// regenerating the mesh.
    pub fn set_steps(&mut self, steps: u32) -> Result<(), ShapeError> {
        validate_steps(steps)?;

        tracing::debug!(from = self.steps, to = steps, "Resizing circle geometry");

        self.steps = steps;
        self.buffers
            .resize(steps as usize, Self::triangle_count_for(steps));
        self.update();

        Ok(())
    }

    fn triangle_count_for(steps: u32) -> usize {
        steps as usize - 2
    }

    fn allocate(steps: u32) -> BufferGeometry {
        BufferGeometry::new(steps as usize, Self::triangle_count_for(steps))
    }

    fn setup_vertices(&mut self) {
        let increment = TAU / self.steps as f32;

        for (i, vertex) in self.buffers.vertices.iter_mut().enumerate() {
            let angle = increment * (i + 1) as f32;
            *vertex = (Vec2::from_angle(angle) * self.radius).extend(0.0);
        }
    }

    fn setup_uv(&mut self) {
        let diameter = self.radius * 2.0;

        for (uv, vertex) in self.buffers.uv.iter_mut().zip(&self.buffers.vertices) {
            *uv = vertex.truncate() / diameter + Vec2::splat(0.5);
        }
    }

    fn setup_triangles(&mut self) {
        for (i, triangle) in self.buffers.triangles.chunks_exact_mut(3).enumerate() {
            let i = i as u32;
            triangle.copy_from_slice(&[0, i + 2, i + 1]);
        }
    }
}

impl Geometry for CircleGeometry {
    fn update(&mut self) {
        tracing::trace!(steps = self.steps, "Updating circle geometry");

        self.setup_vertices();
        self.setup_uv();
        self.setup_triangles();
    }

    fn buffers(&self) -> &BufferGeometry {
        &self.buffers
    }

    fn set_vertex_direct(&mut self, index: usize, point: Vec2) -> Result<(), ShapeError> {
        tracing::warn!(index, "Circle vertex written directly, bypassing update");
        self.buffers.set_vertex(index, point)
    }
}
