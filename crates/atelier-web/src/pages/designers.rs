//! Designers page component

use leptos::prelude::*;

/// Designers page - designer roster
#[component]
pub fn Designers() -> impl IntoView {
    view! {
        <div class="page designers-page">
            <h2>"Designers"</h2>
            <div class="page-content">
                <p>"Designers - Coming Soon"</p>
                <p class="hint">
                    "This will show the designer roster with their collections and commissions."
                </p>
            </div>
        </div>
    }
}
