#![allow(clippy::float_cmp)]

use super::*;

use crate::geometry::Point;

fn viewport(points: &[(f64, f64)]) -> Viewport {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

// --- insertion and deduplication ---

#[test]
fn new_viewport_is_empty() {
    assert!(Viewport::new().is_empty());
}

#[test]
fn duplicate_points_are_stored_once() {
    let viewport = viewport(&[(1.0, 2.0), (1.0, 2.0), (1.0, 2.0)]);
    assert_eq!(viewport.points().len(), 1);
}

#[test]
fn distinct_points_are_all_kept() {
    let viewport = viewport(&[(1.0, 2.0), (1.0, 3.0), (2.0, 2.0)]);
    assert_eq!(viewport.points().len(), 3);
}

#[test]
fn add_point_fills_an_empty_viewport() {
    let mut viewport = Viewport::new();
    viewport.add_point(Point::new(4.0, -4.0));
    assert!(!viewport.is_empty());
}

// --- boundaries ---

#[test]
fn boundaries_of_an_empty_viewport_fail() {
    let result = Viewport::new().boundaries(10.0);
    assert_eq!(result, Err(ViewportError::Empty));
}

#[test]
fn single_point_boundaries_collapse_onto_the_point() {
    let bounds = viewport(&[(3.0, 7.0)]).boundaries(0.0).unwrap();
    assert_eq!(bounds.left, 3.0);
    assert_eq!(bounds.right, 3.0);
    assert_eq!(bounds.bottom, 7.0);
    assert_eq!(bounds.top, 7.0);
    assert_eq!(bounds.width, 0.0);
    assert_eq!(bounds.height, 0.0);
    assert_eq!(bounds.center_x, 3.0);
    assert_eq!(bounds.center_y, 7.0);
}

#[test]
fn boundaries_track_min_and_max() {
    let bounds = viewport(&[(1.0, 5.0), (-2.0, 9.0), (4.0, -1.0)])
        .boundaries(0.0)
        .unwrap();
    assert_eq!(bounds.left, -2.0);
    assert_eq!(bounds.right, 4.0);
    assert_eq!(bounds.bottom, -1.0);
    assert_eq!(bounds.top, 9.0);
}

#[test]
fn top_is_the_maximum_y() {
    // Screen coordinates: y grows downward, so the numeric maximum is
    // reported as `top`.
    let bounds = viewport(&[(0.0, 0.0), (0.0, 100.0)]).boundaries(0.0).unwrap();
    assert_eq!(bounds.top, 100.0);
    assert_eq!(bounds.bottom, 0.0);
}

#[test]
fn padding_expands_every_side() {
    let bounds = viewport(&[(0.0, 0.0), (10.0, 20.0)]).boundaries(3.0).unwrap();
    assert_eq!(bounds.left, -3.0);
    assert_eq!(bounds.right, 13.0);
    assert_eq!(bounds.bottom, -3.0);
    assert_eq!(bounds.top, 23.0);
}

#[test]
fn padded_size_gains_twice_the_padding() {
    let raw = viewport(&[(0.0, 0.0), (10.0, 20.0)]).boundaries(0.0).unwrap();
    let padded = viewport(&[(0.0, 0.0), (10.0, 20.0)]).boundaries(5.0).unwrap();
    assert_eq!(padded.width, raw.width + 10.0);
    assert_eq!(padded.height, raw.height + 10.0);
}

#[test]
fn center_is_the_midpoint_of_the_padded_bounds() {
    let bounds = viewport(&[(0.0, 0.0), (10.0, 20.0)]).boundaries(5.0).unwrap();
    assert_eq!(bounds.center_x, (bounds.left + bounds.right) / 2.0);
    assert_eq!(bounds.center_y, (bounds.bottom + bounds.top) / 2.0);
}

#[test]
fn negative_coordinates_are_handled() {
    let bounds = viewport(&[(-30.0, -40.0), (-10.0, -20.0)])
        .boundaries(0.0)
        .unwrap();
    assert_eq!(bounds.left, -30.0);
    assert_eq!(bounds.right, -10.0);
    assert_eq!(bounds.width, 20.0);
    assert_eq!(bounds.center_x, -20.0);
}
