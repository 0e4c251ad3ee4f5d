//! Static navigation targets and active-route matching

/// Icon for a navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Inventory,
    Designers,
}

/// A fixed navigation target
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

/// The three sections of the admin UI. Never mutated at runtime.
pub static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "Dashboard",
        path: "/dashboard",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        label: "Inventory",
        path: "/products",
        icon: NavIcon::Inventory,
    },
    NavItem {
        label: "Designers",
        path: "/designers",
        icon: NavIcon::Designers,
    },
];

/// Whether `candidate` should render as the active section for `current`.
///
/// True on an exact match, or when `current` is a sub-route of `candidate`
/// (so `/products/ring-42` keeps Inventory highlighted). A candidate with no
/// leading `/` degenerates to a plain prefix comparison, which is acceptable.
pub fn is_active(current: &str, candidate: &str) -> bool {
    current == candidate
        || current
            .strip_prefix(candidate)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(is_active("/designers", "/designers"));
    }

    #[test]
    fn test_sub_route_highlights_parent() {
        assert!(is_active("/products/ring-42", "/products"));
        assert!(is_active("/designers/elsa-peretti/pieces", "/designers"));
    }

    #[test]
    fn test_other_sections_not_active() {
        assert!(!is_active("/products/ring-42", "/dashboard"));
        assert!(!is_active("/dashboard", "/products"));
        assert!(!is_active("/", "/dashboard"));
    }

    #[test]
    fn test_shared_prefix_without_separator() {
        // "/productsarchive" is not under "/products"
        assert!(!is_active("/productsarchive", "/products"));
    }

    #[test]
    fn test_candidate_without_leading_separator() {
        // Degenerates to a prefix comparison; acceptable, not an error.
        assert!(is_active("products/ring-42", "products"));
        assert!(!is_active("/products/ring-42", "products"));
    }

    #[test]
    fn test_nav_items_are_fixed() {
        let paths: Vec<_> = NAV_ITEMS.iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/dashboard", "/products", "/designers"]);
    }
}
