//! Navigation header: promo banner, logo, desktop nav, search and mobile menu

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::{SearchIcon, SectionIcon};
use super::{MobileMenu, SearchBar};
use crate::nav::{is_active, NavItem, NAV_ITEMS};

/// Transient header view state. Both flags start false at mount and are
/// independent of each other; nothing survives a remount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub search_visible: bool,
    pub menu_open: bool,
}

impl HeaderState {
    /// Flip search-bar visibility
    pub fn toggle_search(&mut self) {
        self.search_visible = !self.search_visible;
    }

    /// Flip the mobile menu
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the mobile menu. Every mobile navigation link calls this, so
    /// navigating always leaves the menu closed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Header with promo banner, logo, navigation links, and search toggle
#[component]
pub fn Header() -> impl IntoView {
    let (state, set_state) = signal(HeaderState::default());

    let search_visible = move || state.get().search_visible;
    let menu_open = move || state.get().menu_open;

    view! {
        <header class="site-header">
            <div class="promo-banner">
                "Complimentary insured shipping on orders over £500"
            </div>

            <div class="header-bar">
                <A href="/dashboard" attr:class="logo">
                    <img
                        class="logo-mark"
                        src="https://cdn.atelier-retail.com/brand/atelier-mark.svg"
                        alt="Atelier"
                    />
                    <span class="logo-text">"Atelier"</span>
                </A>

                <nav class="desktop-nav">
                    {NAV_ITEMS.iter().map(|item| view! { <NavLink item /> }).collect_view()}
                </nav>

                <div class="header-actions">
                    <button
                        class="icon-button search-toggle"
                        on:click=move |_| set_state.update(|s| s.toggle_search())
                        aria-label="Toggle search"
                        aria-expanded=move || search_visible().to_string()
                    >
                        <SearchIcon />
                    </button>

                    <button
                        class="icon-button hamburger"
                        on:click=move |_| set_state.update(|s| s.toggle_menu())
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        <span class="hamburger-icon">
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </span>
                    </button>
                </div>
            </div>

            <Show when=search_visible>
                <SearchBar />
            </Show>

            <Show when=menu_open>
                <MobileMenu set_state />
            </Show>
        </header>
    }
}

/// Desktop navigation link, highlighted while its section is displayed
#[component]
fn NavLink(item: &'static NavItem) -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| is_active(&location.pathname.get(), item.path));

    view! {
        <A
            href=item.path
            attr:class=move || {
                if active.get() { "nav-link nav-link-active" } else { "nav-link" }
            }
        >
            <span class="nav-link-icon">
                <SectionIcon icon=item.icon />
            </span>
            <span class="nav-link-label">{item.label}</span>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_collapsed() {
        let state = HeaderState::default();
        assert!(!state.search_visible);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_toggle_search_twice_is_identity() {
        let mut state = HeaderState::default();
        state.toggle_search();
        assert!(state.search_visible);
        state.toggle_search();
        assert_eq!(state, HeaderState::default());
    }

    #[test]
    fn test_toggle_menu_twice_is_identity() {
        let mut state = HeaderState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert_eq!(state, HeaderState::default());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = HeaderState::default();
        state.toggle_search();
        state.toggle_menu();
        assert!(state.search_visible);
        assert!(state.menu_open);
        state.toggle_search();
        assert!(!state.search_visible);
        assert!(state.menu_open);
    }

    #[test]
    fn test_close_menu_from_either_state() {
        let mut state = HeaderState::default();
        state.close_menu();
        assert!(!state.menu_open);

        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open);
    }
}
