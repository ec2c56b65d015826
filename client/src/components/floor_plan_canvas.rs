//! Bridge component between Leptos signals and the imperative
//! `floorplan::render` pipeline.
//!
//! ARCHITECTURE
//! ============
//! The `floorplan` crate owns geometry and drawing; this host owns the
//! redraw schedule. Size and offset changes are deduplicated per source
//! (memos), combined in one effect, and coalesced through a short settling
//! delay so a resize burst produces a single repaint.

#[cfg(test)]
#[path = "floor_plan_canvas_test.rs"]
mod floor_plan_canvas_test;

use leptos::prelude::*;

use crate::state::window::WindowState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use floorplan::geometry::{Point, Segment};
#[cfg(feature = "csr")]
use floorplan::plan::craft_room_walls;
#[cfg(feature = "csr")]
use floorplan::render;
#[cfg(feature = "csr")]
use floorplan::viewport::Size;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Settling delay between the last size/offset change and the repaint, in
/// milliseconds.
#[cfg(feature = "csr")]
const SETTLE_DELAY_MS: u32 = 10;

/// Format a CSS pixel length.
fn css_px(value: f64) -> String {
    format!("{value}px")
}

/// Canvas host component.
///
/// Owns the grid phase offsets, matches the canvas backing store to the
/// window size, and redraws through [`floorplan::render::draw`]. A redraw
/// is skipped (and retried on the next triggered render) while the canvas
/// is detached or the window size is not yet known.
#[component]
pub fn FloorPlanCanvas() -> impl IntoView {
    let window = expect_context::<RwSignal<WindowState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Grid phase offsets; zero keeps the grid anchored to the plan bounds.
    #[cfg(feature = "csr")]
    let offset_x = RwSignal::new(0.0_f64);
    #[cfg(feature = "csr")]
    let offset_y = RwSignal::new(0.0_f64);

    // Per-source deduplication: a memo only notifies when its value
    // actually changes, so repeated identical emissions stop here.
    let size = Memo::new(move |_| window.get().size);
    #[cfg(feature = "csr")]
    let phase_x = Memo::new(move |_| offset_x.get());
    #[cfg(feature = "csr")]
    let phase_y = Memo::new(move |_| offset_y.get());

    // The canvas element's CSS size tracks the window.
    let style_width = move || css_px(size.get().width);
    let style_height = move || css_px(size.get().height);

    #[cfg(feature = "csr")]
    {
        // The wall set is permanent input: built once at mount, immutable
        // afterwards.
        let walls: Rc<Vec<Segment>> = match craft_room_walls() {
            Ok(walls) => Rc::new(walls),
            Err(err) => {
                log::error!("floor plan is invalid, rendering disabled: {err}");
                Rc::new(Vec::new())
            }
        };

        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        {
            let pending = Rc::clone(&pending);
            Effect::new(move || {
                // Track the canvas node too, so the first draw re-runs once
                // the element attaches.
                let _ = canvas_ref.get();
                let size = size.get();
                let offset = Point::new(phase_x.get(), phase_y.get());

                // Re-arm the settling timeout on every distinct combined
                // state; dropping the previous handle cancels it, so only
                // the last change in a burst fires a redraw.
                let walls = Rc::clone(&walls);
                let fired = Rc::clone(&pending);
                let timeout = Timeout::new(SETTLE_DELAY_MS, move || {
                    fired.borrow_mut().take();
                    draw_frame(&canvas_ref, size, offset, &walls);
                });
                let stale = pending.borrow_mut().replace(timeout);
                drop(stale);
            });
        }

        on_cleanup(move || {
            // Cancel any redraw scheduled against a surface that is about
            // to disappear.
            let stale = pending.borrow_mut().take();
            drop(stale);
        });
    }

    view! {
        <canvas
            class="floor-plan-canvas"
            node_ref=canvas_ref
            style:width=style_width
            style:height=style_height
        >
            "Your browser does not support canvas."
        </canvas>
    }
}

/// Draw one frame to the canvas, or skip it if the surface is not ready.
///
/// Skips never raise: the next size/offset change retries, and a skipped
/// or failed frame leaves the previous frame's pixels in place.
#[cfg(feature = "csr")]
fn draw_frame(
    canvas_ref: &NodeRef<leptos::html::Canvas>,
    size: Size,
    offset: Point,
    walls: &[Segment],
) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        log::debug!("skipping redraw: canvas not mounted");
        return;
    };
    if size.width <= 0.0 || size.height <= 0.0 {
        log::debug!("skipping redraw: window size not known yet");
        return;
    }

    // Match the backing store to the CSS size; this also clears the pixels.
    canvas.set_width(size.width as u32);
    canvas.set_height(size.height as u32);

    let Ok(Some(context)) = canvas.get_context("2d") else {
        log::debug!("skipping redraw: no 2d context");
        return;
    };
    let Ok(context) = context.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        log::debug!("skipping redraw: unexpected context type");
        return;
    };

    if let Err(err) = render::draw(&context, size, offset, walls) {
        log::error!("floor plan render failed: {err:?}");
    }
}
