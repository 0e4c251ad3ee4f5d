//! Leptos UI components

mod header;
mod icons;
mod mobile_menu;
mod search_bar;

pub use header::{Header, HeaderState};
pub use mobile_menu::MobileMenu;
pub use search_bar::SearchBar;
