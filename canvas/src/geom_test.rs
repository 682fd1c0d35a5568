#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_offset_from_origin() {
    let p = Point::new(130.0, 245.0);
    assert_eq!(p.offset_from(Point::new(30.0, 45.0)), Point::new(100.0, 200.0));
}

#[test]
fn point_distance() {
    assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_center() {
    assert_eq!(Bounds::new(400.0, 300.0).center(), Point::new(200.0, 150.0));
}

#[test]
fn bounds_rejects_negative_and_non_finite_extents() {
    let b = Bounds::new(-10.0, f64::NAN);
    assert_eq!(b.width, 0.0);
    assert_eq!(b.height, 0.0);
    assert!(b.is_empty());
    assert!(Bounds::new(f64::INFINITY, 10.0).is_empty());
}

#[test]
fn bounds_default_is_empty() {
    assert!(Bounds::default().is_empty());
    assert!(!Bounds::new(1.0, 1.0).is_empty());
}

#[test]
fn clamp_inside_is_identity() {
    let b = Bounds::new(300.0, 400.0);
    assert_eq!(b.clamp(Point::new(12.5, 399.0)), Point::new(12.5, 399.0));
}

#[test]
fn clamp_far_outside() {
    let b = Bounds::new(300.0, 400.0);
    assert_eq!(b.clamp(Point::new(-50.0, 500.0)), Point::new(0.0, 400.0));
    assert_eq!(b.clamp(Point::new(1e12, -1e12)), Point::new(300.0, 0.0));
}

#[test]
fn clamp_non_finite() {
    let b = Bounds::new(300.0, 400.0);
    assert_eq!(b.clamp(Point::new(f64::NAN, f64::NAN)), Point::new(0.0, 0.0));
    assert_eq!(b.clamp(Point::new(f64::INFINITY, f64::NEG_INFINITY)), Point::new(300.0, 0.0));
}

#[test]
fn clamp_on_empty_bounds_pins_to_origin() {
    let b = Bounds::default();
    assert_eq!(b.clamp(Point::new(20.0, 30.0)), Point::new(0.0, 0.0));
}

#[test]
fn contains_is_inclusive_of_edges() {
    let b = Bounds::new(10.0, 10.0);
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(10.0, 10.0)));
    assert!(!b.contains(Point::new(10.1, 5.0)));
    assert!(!b.contains(Point::new(5.0, -0.1)));
}

// =============================================================
// CanvasRect
// =============================================================

#[test]
fn rect_to_local_subtracts_origin() {
    let rect = CanvasRect::new(40.0, 120.0, 600.0, 400.0);
    assert_eq!(rect.to_local(Point::new(140.0, 220.0)), Point::new(100.0, 100.0));
}

#[test]
fn rect_to_local_is_unclamped() {
    let rect = CanvasRect::new(40.0, 120.0, 600.0, 400.0);
    assert_eq!(rect.to_local(Point::new(0.0, 0.0)), Point::new(-40.0, -120.0));
}

#[test]
fn rect_bounds_and_origin() {
    let rect = CanvasRect::new(8.0, 16.0, 320.0, 240.0);
    assert_eq!(rect.origin(), Point::new(8.0, 16.0));
    assert_eq!(rect.bounds(), Bounds::new(320.0, 240.0));
}
