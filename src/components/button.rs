//! Button Component

use gpui::{
    div, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::StoreColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (yellow)
    #[default]
    Primary,
    /// Accent button (orange)
    Accent,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            full_width: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Stretch the button to the width of its container
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set the click handler; without one the button renders inert
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create an accent button
    pub fn accent(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Accent)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                StoreColors::button_primary_bg(),
                StoreColors::button_primary_hover(),
            ),
            ButtonVariant::Accent => (
                StoreColors::button_accent_bg(),
                StoreColors::button_accent_hover(),
            ),
        };

        let mut element = div()
            .id(self.id)
            .px_4()
            .py_2()
            .bg(bg_color)
            .text_color(StoreColors::button_text())
            .text_sm()
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .flex()
            .items_center()
            .justify_center()
            .child(self.label);

        if self.full_width {
            element = element.w_full();
        }

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
