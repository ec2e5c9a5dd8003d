//! Navigation - Static Navbar Link Data
//!
//! The navbar renders a fixed set of links. The hrefs are carried as data
//! for composition and tests; no routing acts on them.

/// A static navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Text shown in the navbar
    pub label: &'static str,
    /// Link target, kept as data only
    pub href: &'static str,
}

/// Brand link shown at the left edge of the navbar
pub const BRAND_LINK: NavLink = NavLink {
    label: "Shopfront",
    href: "#",
};

/// Navigation links shown after the search bar, in display order
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "About",
        href: "/about",
    },
    NavLink {
        label: "Contact",
        href: "/contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_link_is_fixed() {
        assert_eq!(BRAND_LINK.label, "Shopfront");
        assert_eq!(BRAND_LINK.href, "#");
    }

    #[test]
    fn test_three_nav_links_in_fixed_order() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(hrefs, vec!["/", "/about", "/contact"]);

        let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Contact"]);
    }
}
