#![allow(dead_code)]

use glam::{Vec2, Vec3};
use poli_shapes::Geometry;

pub const EPSILON: f32 = 1e-5;

pub fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, EPSILON),
        "expected {expected:?}, got {actual:?}"
    );
}

pub fn assert_vec2_eq(actual: Vec2, expected: Vec2) {
    assert!(
        actual.abs_diff_eq(expected, EPSILON),
        "expected {expected:?}, got {actual:?}"
    );
}

/// Twice the signed area of each triangle. Negative means clockwise with y
/// pointing up.
pub fn signed_areas(geometry: &dyn Geometry) -> Vec<f32> {
    let vertices = geometry.vertices();

    geometry
        .triangles()
        .chunks_exact(3)
        .map(|t| {
            let a = vertices[t[0] as usize].truncate();
            let b = vertices[t[1] as usize].truncate();
            let c = vertices[t[2] as usize].truncate();
            (b - a).perp_dot(c - a)
        })
        .collect()
}

pub fn assert_clockwise(geometry: &dyn Geometry) {
    for (i, area) in signed_areas(geometry).into_iter().enumerate() {
        assert!(area < 0.0, "triangle {i} is not clockwise (area {area})");
    }
}
