//! Rendering: draws the fitted floor plan to a 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives the wall set and the
//! live canvas size/offset values and produces pixels. It keeps no state
//! between frames, and every frame repaints from scratch.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The host component handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{GRID_SPACING, VIEWPORT_PADDING};
use crate::geometry::{Point, Segment};
use crate::viewport::{Boundaries, Size, Viewport};

/// Floor fill color; the filled outline doubles as the grid clip region.
const FLOOR_FILL: &str = "#fff";

/// Grid and wall stroke color.
const LINE_COLOR: &str = "#000";

/// Grid stroke width in device pixels (divided by the fit scale).
const GRID_LINE_WIDTH_PX: f64 = 1.0;

/// Wall stroke width in device pixels (divided by the fit scale).
const WALL_LINE_WIDTH_PX: f64 = 3.0;

/// Cap style for wall strokes.
const WALL_LINE_CAP: &str = "square";

/// The uniform zoom that fits `bounds` inside `canvas` without distortion.
///
/// Picks the more constraining axis, so scaled content never exceeds the
/// canvas in either dimension.
#[must_use]
pub fn fit_scale(canvas: Size, bounds: &Boundaries) -> f64 {
    (canvas.width / bounds.width).min(canvas.height / bounds.height)
}

/// Grid line positions across `[min, max)`, phase-shifted by `offset`.
///
/// The first line sits at `min + offset.rem_euclid(GRID_SPACING)`; from
/// there lines repeat every [`GRID_SPACING`] units. Offsets of any sign or
/// magnitude only move the phase, never the spacing.
#[must_use]
pub fn grid_positions(min: f64, max: f64, offset: f64) -> Vec<f64> {
    if min >= max || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let start = min + offset.rem_euclid(GRID_SPACING);
    (0..)
        .map(|step| GRID_SPACING.mul_add(f64::from(step), start))
        .take_while(|position| *position < max)
        .collect()
}

/// Draw one frame: white floor fill, clipped grid, wall strokes.
///
/// Output is a pure function of the arguments; the transform and clip
/// pushed here are popped before returning, so no context state leaks into
/// the next frame. Degenerate input (an empty wall set, or bounds with no
/// area) skips the frame and leaves existing pixels untouched.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context
/// state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    canvas: Size,
    offset: Point,
    walls: &[Segment],
) -> Result<(), JsValue> {
    let viewport: Viewport = walls.iter().flat_map(|wall| [wall.a, wall.b]).collect();
    let Ok(bounds) = viewport.boundaries(VIEWPORT_PADDING) else {
        // No walls, nothing to draw.
        return Ok(());
    };
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Ok(());
    }
    let scale = fit_scale(canvas, &bounds);

    ctx.save();

    // Center the plan on the canvas, then zoom uniformly.
    ctx.translate(canvas.width / 2.0, canvas.height / 2.0)?;
    ctx.scale(scale, scale)?;
    ctx.translate(-bounds.center_x, -bounds.center_y)?;

    // Floor: fill the outline, then clip the grid to it. The path visits
    // each wall's start point only; fill/clip close the final edge
    // implicitly.
    ctx.save();
    ctx.begin_path();
    for (i, wall) in walls.iter().enumerate() {
        if i == 0 {
            ctx.move_to(wall.a.x, wall.a.y);
        } else {
            ctx.line_to(wall.a.x, wall.a.y);
        }
    }
    ctx.set_fill_style_str(FLOOR_FILL);
    ctx.fill();
    ctx.clip();

    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(GRID_LINE_WIDTH_PX / scale);
    ctx.begin_path();
    for x in grid_positions(bounds.left, bounds.right, offset.x) {
        ctx.move_to(x, bounds.top);
        ctx.line_to(x, bounds.bottom);
    }
    for y in grid_positions(bounds.bottom, bounds.top, offset.y) {
        ctx.move_to(bounds.left, y);
        ctx.line_to(bounds.right, y);
    }
    ctx.stroke();
    ctx.restore();

    // Walls: each segment stroked on its own over the grid.
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(WALL_LINE_WIDTH_PX / scale);
    ctx.set_line_cap(WALL_LINE_CAP);
    for wall in walls {
        ctx.begin_path();
        ctx.move_to(wall.a.x, wall.a.y);
        ctx.line_to(wall.b.x, wall.b.y);
        ctx.stroke();
    }

    ctx.restore();
    Ok(())
}
