//! Catalog - the fixed product list for the storefront page.
//!
//! The page is data-driven: the root view maps over this sequence instead of
//! hard-coding one card expression per product.

use crate::domain::product::ProductDisplayInfo;

/// Products featured on the storefront page, in display order.
pub fn featured_products() -> Vec<ProductDisplayInfo> {
    vec![
        ProductDisplayInfo::new("Apple Macbook Pro M4", "2300").with_image_url(""),
        ProductDisplayInfo::new("Apple Iphone 17 Pro", "1200"),
        ProductDisplayInfo::new("Bose Headphones", "400"),
        ProductDisplayInfo::new("Ipad Pro 16th Gen", "500"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_four_products_in_fixed_order() {
        let products = featured_products();

        let expected = [
            ("Apple Macbook Pro M4", "2300"),
            ("Apple Iphone 17 Pro", "1200"),
            ("Bose Headphones", "400"),
            ("Ipad Pro 16th Gen", "500"),
        ];

        assert_eq!(products.len(), expected.len());
        for (product, (name, price)) in products.iter().zip(expected) {
            assert_eq!(product.name.as_ref(), name);
            assert_eq!(product.price.as_ref(), price);
        }
    }

    #[test]
    fn test_no_product_has_an_image() {
        for product in featured_products() {
            assert_eq!(product.image_url.as_ref(), "");
        }
    }

    #[test]
    fn test_product_ids_are_distinct() {
        let products = featured_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_catalog_is_pure() {
        // Same inputs, same output: the page re-renders identically.
        assert_eq!(featured_products(), featured_products());
    }
}
