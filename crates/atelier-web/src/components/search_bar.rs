//! Toggleable search bar
//!
//! The input is not wired to a query backend yet; the header only controls
//! its visibility.

use leptos::{html, prelude::*};

/// Search input, focused as soon as it becomes visible
#[component]
pub fn SearchBar() -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    // The bar only exists while visible, so focus on mount.
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <div class="search-bar">
            <input
                node_ref=input_ref
                type="text"
                class="search-input"
                placeholder="Search pieces, collections, designers..."
            />
        </div>
    }
}
