//! Mobile navigation menu, rendered only while the header's menu flag is set

use leptos::prelude::*;
use leptos_router::components::A;

use super::header::HeaderState;
use super::icons::SectionIcon;
use crate::nav::NAV_ITEMS;

/// Mobile menu duplicating the three navigation targets
#[component]
pub fn MobileMenu(set_state: WriteSignal<HeaderState>) -> impl IntoView {
    // Following a link always collapses the menu
    let close_menu = move |_| set_state.update(|s| s.close_menu());

    view! {
        <nav class="mobile-menu">
            <ul class="mobile-menu-list">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="mobile-menu-item">
                                <A
                                    href=item.path
                                    attr:class="mobile-menu-link"
                                    on:click=close_menu
                                >
                                    <span class="mobile-menu-icon">
                                        <SectionIcon icon=item.icon />
                                    </span>
                                    <span class="mobile-menu-label">{item.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
