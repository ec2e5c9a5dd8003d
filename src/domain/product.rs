//! Product display data and stable product identifiers.

use std::fmt;

use gpui::SharedString;

/// Display data for a single product on the storefront page.
///
/// All fields are opaque display strings. `price` in particular is rendered
/// verbatim after the currency symbol - no numeric parsing, rounding, or
/// locale formatting happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDisplayInfo {
    /// Product name shown on the card
    pub name: SharedString,
    /// Price shown after the currency symbol
    pub price: SharedString,
    /// Bundled asset path for the product image; empty means no image
    pub image_url: SharedString,
}

impl ProductDisplayInfo {
    /// Create a product with no image.
    pub fn new(name: impl Into<SharedString>, price: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            image_url: SharedString::default(),
        }
    }

    /// Set the bundled asset path for the product image.
    pub fn with_image_url(mut self, image_url: impl Into<SharedString>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Stable identifier derived from the product name.
    pub fn id(&self) -> ProductId {
        ProductId(slugify(&self.name).into())
    }
}

/// Stable product identifier, derived from the display name by slugging.
///
/// Cards are keyed by this id rather than by list position, and the
/// add-to-cart capability receives it, so the same product keeps the same
/// identity across renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(SharedString);

impl ProductId {
    /// The slug form of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase ASCII alphanumerics; runs of anything else collapse to a single
/// dash, with no leading or trailing dash.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_dashes() {
        assert_eq!(slugify("Apple Macbook Pro M4"), "apple-macbook-pro-m4");
        assert_eq!(slugify("Bose Headphones"), "bose-headphones");
    }

    #[test]
    fn test_slugify_collapses_runs_and_trims_edges() {
        assert_eq!(slugify("  Ipad   Pro  "), "ipad-pro");
        assert_eq!(slugify("100% Wool (Grey)"), "100-wool-grey");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_id_is_stable_for_equal_names() {
        let a = ProductDisplayInfo::new("Bose Headphones", "400");
        let b = ProductDisplayInfo::new("Bose Headphones", "999");
        assert_eq!(a.id(), b.id());
        assert_eq!(a.id().as_str(), "bose-headphones");
    }

    #[test]
    fn test_image_url_defaults_to_empty() {
        let product = ProductDisplayInfo::new("Apple Iphone 17 Pro", "1200");
        assert_eq!(product.image_url.as_ref(), "");

        // An explicitly empty url is the same value as the default.
        let explicit = ProductDisplayInfo::new("Apple Iphone 17 Pro", "1200").with_image_url("");
        assert_eq!(product, explicit);
    }

    #[test]
    fn test_price_is_an_opaque_string() {
        // Not a number: passed through untouched.
        let product = ProductDisplayInfo::new("Gift Card", "50.00 or so");
        assert_eq!(product.price.as_ref(), "50.00 or so");
    }

    #[test]
    fn test_clone_preserves_equality() {
        let product = ProductDisplayInfo::new("Apple Macbook Pro M4", "2300").with_image_url("");
        assert_eq!(product.clone(), product);
    }
}
