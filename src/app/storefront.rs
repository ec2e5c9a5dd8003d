//! Storefront - The Page Root
//!
//! The root view renders the navbar once, then one product card per catalog
//! record, in catalog order. The composition is data-driven: the view maps
//! over the catalog instead of hard-coding a card per product, and cards are
//! keyed by their stable product ids.

use gpui::{
    div, prelude::*, Context, InteractiveElement, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::components::navbar::Navbar;
use crate::components::product_card::ProductCard;
use crate::domain::catalog::featured_products;
use crate::domain::product::ProductDisplayInfo;
use crate::theme::colors::StoreColors;

/// Root view for the storefront page
pub struct Storefront {
    products: Vec<ProductDisplayInfo>,
}

impl Storefront {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            products: featured_products(),
        }
    }

    fn render_product_list(&self) -> impl IntoElement {
        div()
            .id("product-list")
            .flex_1()
            .overflow_y_scroll()
            .p_4()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .children(self.products.iter().map(|product| {
                ProductCard::new(product.clone()).on_add_to_cart(|product_id, _window, _cx| {
                    tracing::info!(product = %product_id, "Add to cart requested");
                })
            }))
    }
}

impl Render for Storefront {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(StoreColors::page_bg())
            .child(Navbar::new().on_search(|query, _window, _cx| {
                tracing::info!(query, "Search submitted");
            }))
            .child(self.render_product_list())
    }
}
