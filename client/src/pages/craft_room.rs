//! Craft-room page — the floor-plan viewing screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing and window-size plumbing live in `App`; this page mounts the
//! canvas host that owns the redraw pipeline.

use leptos::prelude::*;

use crate::components::floor_plan_canvas::FloorPlanCanvas;

/// Craft-room page — a full-window canvas showing the fitted floor plan.
#[component]
pub fn CraftRoomPage() -> impl IntoView {
    view! {
        <main class="craft-room-page">
            <FloorPlanCanvas/>
        </main>
    }
}
