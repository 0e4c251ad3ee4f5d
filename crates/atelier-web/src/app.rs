//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Header;
use crate::pages::{Dashboard, Designers, Inventory};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <main class="content">
                    <Routes fallback=|| "Not found">
                        <Route path=path!("/") view=Dashboard />
                        <Route path=path!("/dashboard") view=Dashboard />
                        <Route path=path!("/products") view=Inventory />
                        <Route path=path!("/designers") view=Designers />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
