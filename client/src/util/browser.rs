//! Browser window bindings.
//!
//! Everything here depends on `web_sys` and only exists in the browser
//! build; the whole module is `csr`-gated.

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use floorplan::viewport::Size;

#[cfg(feature = "csr")]
use crate::state::window::WindowState;

/// Read the window's current inner size in CSS pixels.
#[cfg(feature = "csr")]
#[must_use]
pub fn window_inner_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

/// Seed `state` with the current window size and update it on every
/// `resize` event.
///
/// The listener lives as long as the app itself, so the closure is
/// forgotten rather than kept for removal.
#[cfg(feature = "csr")]
pub fn install_resize_listener(state: RwSignal<WindowState>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    if let Some(size) = window_inner_size() {
        state.set(WindowState::new(size));
    }

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(size) = window_inner_size() {
            state.set(WindowState::new(size));
        }
    });
    if window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach the window resize listener");
    }
    on_resize.forget();
}
