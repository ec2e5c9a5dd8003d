//! ProductCard Component
//!
//! A static visual block for one product: image area, name, currency-prefixed
//! price, and an "Add to Cart" button.

use gpui::{
    div, img, px, App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::button::Button;
use crate::constants::{CURRENCY_SYMBOL, PRODUCT_CARD_WIDTH, PRODUCT_IMAGE_SIZE};
use crate::domain::product::{ProductDisplayInfo, ProductId};
use crate::theme::colors::StoreColors;

/// Add-to-cart capability handler; receives the stable product id
pub type AddToCartHandler = dyn Fn(&ProductId, &mut Window, &mut App) + 'static;

/// Product card component
#[derive(IntoElement)]
pub struct ProductCard {
    product: ProductDisplayInfo,
    on_add_to_cart: Option<Box<AddToCartHandler>>,
}

impl ProductCard {
    /// Create a card for one product
    pub fn new(product: ProductDisplayInfo) -> Self {
        Self {
            product,
            on_add_to_cart: None,
        }
    }

    /// Supply the add-to-cart capability; without it the button is inert
    pub fn on_add_to_cart(
        mut self,
        handler: impl Fn(&ProductId, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_add_to_cart = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for ProductCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let product_id = self.product.id();
        let ProductDisplayInfo {
            name,
            price,
            image_url,
        } = self.product;

        let mut add_button = Button::primary(
            SharedString::from(format!("add-to-cart-{product_id}")),
            "Add to Cart",
        )
        .full_width();
        if let Some(handler) = self.on_add_to_cart {
            let id = product_id.clone();
            add_button = add_button.on_click(move |_event, window, cx| handler(&id, window, cx));
        }

        div()
            .id(SharedString::from(format!("card-{product_id}")))
            .w(px(PRODUCT_CARD_WIDTH))
            .bg(StoreColors::card_bg())
            .border_1()
            .border_color(StoreColors::border())
            .rounded_md()
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            // Product image area. An empty url resolves to no asset and
            // leaves the frame blank; it never fails the render.
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .bg(StoreColors::image_placeholder_bg())
                    .rounded_md()
                    .child(img(image_url).size(px(PRODUCT_IMAGE_SIZE))),
            )
            // Product name
            .child(
                div()
                    .text_color(StoreColors::text_primary())
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(name),
            )
            // Currency symbol and the opaque price string are separate text
            // nodes; the price renders verbatim.
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .text_color(StoreColors::price())
                    .child(div().text_sm().child(CURRENCY_SYMBOL))
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(price),
                    ),
            )
            .child(add_button)
    }
}
