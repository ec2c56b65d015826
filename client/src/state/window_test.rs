#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_size_is_zero() {
    let state = WindowState::default();
    assert_eq!(state.width(), 0.0);
    assert_eq!(state.height(), 0.0);
}

#[test]
fn new_stores_the_size() {
    let state = WindowState::new(Size::new(1280.0, 720.0));
    assert_eq!(state.width(), 1280.0);
    assert_eq!(state.height(), 720.0);
}

#[test]
fn equal_states_compare_equal() {
    // This equality is the dedup gate: a memo over this state must not
    // notify when the same size arrives twice.
    let a = WindowState::new(Size::new(800.0, 600.0));
    let b = WindowState::new(Size::new(800.0, 600.0));
    assert_eq!(a, b);
}

#[test]
fn different_sizes_compare_unequal() {
    let a = WindowState::new(Size::new(800.0, 600.0));
    let b = WindowState::new(Size::new(800.0, 601.0));
    assert_ne!(a, b);
}
