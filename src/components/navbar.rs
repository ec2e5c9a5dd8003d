//! Navbar Component
//!
//! The storefront navigation bar: a brand link, a decorative search bar, and
//! the static navigation links. The navbar takes no display inputs; its only
//! surface is the optional search capability supplied by the parent.

use gpui::{
    div, px, App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::app::navigation::{BRAND_LINK, NAV_LINKS, NavLink};
use crate::components::button::Button;
use crate::constants::NAVBAR_HEIGHT;
use crate::theme::colors::StoreColors;

const SEARCH_PLACEHOLDER: &str = "Search Shopfront";

/// Search capability handler; receives the submitted query
pub type SearchHandler = dyn Fn(&str, &mut Window, &mut App) + 'static;

/// Navbar component
#[derive(IntoElement)]
pub struct Navbar {
    on_search: Option<Box<SearchHandler>>,
}

impl Navbar {
    /// Create the navbar
    pub fn new() -> Self {
        Self { on_search: None }
    }

    /// Supply the search capability; without it the search button is inert
    pub fn on_search(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_search = Some(Box::new(handler));
        self
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

fn render_brand() -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_2()
        // Logo block
        .child(
            div()
                .size(px(32.0))
                .rounded_md()
                .bg(StoreColors::button_accent_bg())
                .flex()
                .items_center()
                .justify_center()
                .text_color(StoreColors::navbar_bg())
                .font_weight(gpui::FontWeight::BOLD)
                .child("S"),
        )
        .child(
            div()
                .text_color(StoreColors::navbar_text())
                .text_size(px(18.0))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .child(BRAND_LINK.label),
        )
}

fn render_search(on_search: Option<Box<SearchHandler>>) -> impl IntoElement {
    let mut button = Button::accent("navbar-search", "🔍");
    if let Some(handler) = on_search {
        // The search field is display-only, so the submitted query is always
        // empty for now.
        // TODO: wire a real text input so the query reflects typed text.
        button = button.on_click(move |_event, window, cx| handler("", window, cx));
    }

    div()
        .flex_1()
        .max_w(px(480.0))
        .flex()
        .items_center()
        .gap_2()
        .child(
            div()
                .flex_1()
                .px_3()
                .py_2()
                .bg(StoreColors::input_bg())
                .rounded_md()
                .text_sm()
                .text_color(StoreColors::text_muted())
                .child(SEARCH_PLACEHOLDER),
        )
        .child(button)
}

fn render_nav_link(link: NavLink) -> impl IntoElement {
    // The href stays data-only; there is no routing to act on it.
    div()
        .id(SharedString::from(format!(
            "nav-{}",
            link.label.to_lowercase()
        )))
        .px_2()
        .py_1()
        .text_color(StoreColors::navbar_text())
        .text_sm()
        .cursor_pointer()
        .hover(|s| s.text_color(StoreColors::navbar_link_hover()))
        .child(link.label)
}

impl RenderOnce for Navbar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .h(px(NAVBAR_HEIGHT))
            .w_full()
            .bg(StoreColors::navbar_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .gap_4()
            .child(render_brand())
            .child(render_search(self.on_search))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .children(NAV_LINKS.iter().copied().map(render_nav_link)),
            )
    }
}
