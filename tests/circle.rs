//! Filled circle generator tests.

mod common;

use common::{assert_clockwise, assert_vec3_eq, EPSILON};
use glam::Vec3;
use poli_shapes::{CircleGeometry, CircleGeometryOptions, Geometry, ShapeError};

#[test]
fn test_four_step_circle() {
    let circle = CircleGeometry::new(1.0, 4).unwrap();

    assert_eq!(circle.vertices().len(), 4);
    assert_eq!(circle.uv().len(), 4);
    assert_eq!(circle.triangles(), &[0, 2, 1, 0, 3, 2]);

    for vertex in circle.vertices() {
        assert!((vertex.length() - 1.0).abs() < EPSILON);
        assert_eq!(vertex.z, 0.0);
    }
}

#[test]
fn test_first_sample_is_one_increment_past_zero() {
    let circle = CircleGeometry::new(2.0, 4).unwrap();

    assert_vec3_eq(circle.vertices()[0], Vec3::new(0.0, 2.0, 0.0));
    assert_vec3_eq(circle.vertices()[3], Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_three_steps_make_one_triangle() {
    let circle = CircleGeometry::new(1.0, 3).unwrap();

    assert_eq!(circle.triangle_count(), 1);
    assert_eq!(circle.triangles(), &[0, 2, 1]);
}

#[test]
fn test_fan_is_clockwise() {
    let circle = CircleGeometry::from_options(CircleGeometryOptions::default()).unwrap();

    assert_eq!(circle.triangle_count(), 30);
    assert_clockwise(&circle);
}

#[test]
fn test_uv_maps_disk_into_unit_square() {
    let circle = CircleGeometry::new(7.5, 24).unwrap();

    for (uv, vertex) in circle.uv().iter().zip(circle.vertices()) {
        assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
        assert!((uv.x - (vertex.x / 15.0 + 0.5)).abs() < EPSILON);
        assert!((uv.y - (vertex.y / 15.0 + 0.5)).abs() < EPSILON);
    }
}

#[test]
fn test_invalid_parameters_are_rejected() {
    assert!(matches!(
        CircleGeometry::new(1.0, 2),
        Err(ShapeError::InvalidParameter { name: "steps", .. })
    ));
    assert!(matches!(
        CircleGeometry::new(0.0, 8),
        Err(ShapeError::InvalidParameter { name: "radius", .. })
    ));
    assert!(matches!(
        CircleGeometry::new(-3.0, 8),
        Err(ShapeError::InvalidParameter { name: "radius", .. })
    ));
}

#[test]
fn test_set_radius_applies_on_update() {
    let mut circle = CircleGeometry::new(1.0, 6).unwrap();
    circle.set_radius(3.0).unwrap();

    assert!((circle.vertices()[0].length() - 1.0).abs() < EPSILON);

    circle.update();
    assert!((circle.vertices()[0].length() - 3.0).abs() < EPSILON);
    assert!(circle.set_radius(f32::NAN).is_err());
    assert_eq!(circle.radius(), 3.0);
}

#[test]
fn test_set_steps_resizes_buffers() {
    let mut circle = CircleGeometry::new(1.0, 4).unwrap();
    circle.set_steps(10).unwrap();

    assert_eq!(circle.steps(), 10);
    assert_eq!(circle.vertices().len(), 10);
    assert_eq!(circle.uv().len(), 10);
    assert_eq!(circle.triangles().len(), 8 * 3);
    assert_clockwise(&circle);

    assert!(circle.set_steps(2).is_err());
    assert_eq!(circle.vertices().len(), 10);
}
