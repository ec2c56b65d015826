//! Shared numeric constants for the floorplan crate.

/// Margin in drawing units added on every side of the wall bounds before
/// fitting them to the canvas.
pub const VIEWPORT_PADDING: f64 = 10.0;

/// Distance between neighboring grid lines, in drawing units.
pub const GRID_SPACING: f64 = 12.0;
