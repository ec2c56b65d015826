//! # client
//!
//! Leptos + WASM frontend for the craft-room floor-plan viewer.
//!
//! This crate owns the reactive layer: the shared window-size state, the
//! grid-offset signals, and the debounced redraw pipeline that drives the
//! `floorplan` crate's imperative canvas rendering through the
//! `FloorPlanCanvas` bridge component. Browser-only code is gated behind
//! the `csr` cargo feature so `cargo test` runs natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
