//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::craft_room::CraftRoomPage;
use crate::state::window::WindowState;

/// Root application component.
///
/// Provides the shared window-size state, installs the app-wide resize
/// listener, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let window = RwSignal::new(WindowState::default());
    provide_context(window);

    // Seed the size state and keep it current across resize events.
    #[cfg(feature = "csr")]
    crate::util::browser::install_resize_listener(window);

    view! {
        <Title text="Craft Room"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CraftRoomPage/>
            </Routes>
        </Router>
    }
}
