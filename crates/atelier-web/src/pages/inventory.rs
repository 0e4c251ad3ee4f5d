//! Inventory page component

use leptos::prelude::*;

/// Inventory page - product catalogue
#[component]
pub fn Inventory() -> impl IntoView {
    view! {
        <div class="page inventory-page">
            <h2>"Inventory"</h2>
            <div class="page-content">
                <p>"Inventory - Coming Soon"</p>
                <p class="hint">
                    "This will list pieces with stock levels, pricing, and collection filters."
                </p>
            </div>
        </div>
    }
}
