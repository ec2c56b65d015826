//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the drawing surface and read shared state from Leptos
//! context providers.

pub mod floor_plan_canvas;
