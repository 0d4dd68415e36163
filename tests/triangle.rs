//! Triangle generator tests.

mod common;

use common::{assert_clockwise, assert_vec2_eq, assert_vec3_eq};
use glam::{Vec2, Vec3};
use poli_shapes::{Geometry, TriangleGeometry, TriangleGeometryOptions};

#[test]
fn test_default_triangle() {
    let triangle = TriangleGeometry::default();

    assert_eq!(
        triangle.vertices(),
        &[
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    );
    assert_eq!(
        triangle.uv(),
        &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]
    );
    assert_eq!(triangle.triangles(), &[0, 2, 1]);
    assert_clockwise(&triangle);
}

#[test]
fn test_explicit_points_match_default_constructor() {
    let explicit = TriangleGeometry::new(
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
    );
    let default = TriangleGeometry::default();

    assert_eq!(explicit.buffers(), default.buffers());
}

#[test]
fn test_uv_ignores_vertex_positions() {
    let triangle = TriangleGeometry::from_options(TriangleGeometryOptions {
        left: Vec2::new(-10.0, -3.0),
        right: Vec2::new(25.0, 4.0),
        top: Vec2::new(2.0, 50.0),
    });

    assert_vec2_eq(triangle.uv()[0], Vec2::new(0.0, 0.0));
    assert_vec2_eq(triangle.uv()[1], Vec2::new(1.0, 0.0));
    assert_vec2_eq(triangle.uv()[2], Vec2::new(1.0, 1.0));
}

#[test]
fn test_update_follows_moved_points() {
    let mut triangle = TriangleGeometry::default();
    triangle.top = Vec2::new(0.5, 3.0);
    triangle.update();

    assert_vec3_eq(triangle.vertices()[2], Vec3::new(0.5, 3.0, 0.0));
    assert_eq!(triangle.vertices().len(), 3);
    assert_eq!(triangle.triangles().len(), 3);
}

#[test]
fn test_collinear_points_are_accepted() {
    let triangle = TriangleGeometry::new(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0));

    assert_eq!(triangle.triangle_count(), 1);
    assert!(triangle.vertices().iter().all(|v| v.z == 0.0));
}
