//! Colors - Shopfront Theme Colors

use gpui::{rgb, Rgba};

/// Shopfront color palette - All colors are accessed via associated functions
pub struct StoreColors;

impl StoreColors {
    // Navbar colors
    /// Navbar background - dark navy
    pub fn navbar_bg() -> Rgba { rgb(0x131921) }
    /// Navbar text (brand and links)
    pub fn navbar_text() -> Rgba { rgb(0xffffff) }
    /// Navbar link hover accent
    pub fn navbar_link_hover() -> Rgba { rgb(0xfebd69) }

    // Background colors
    /// Page background
    pub fn page_bg() -> Rgba { rgb(0xeaeded) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Image placeholder background
    pub fn image_placeholder_bg() -> Rgba { rgb(0xf3f4f6) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x0f1111) }
    /// Muted text (search placeholder)
    pub fn text_muted() -> Rgba { rgb(0x6b7280) }
    /// Price text - warm red
    pub fn price() -> Rgba { rgb(0xb12704) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xd5d9d9) }

    // Input colors
    /// Search input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }

    // Button colors
    /// Primary button background (Add to Cart yellow)
    pub fn button_primary_bg() -> Rgba { rgb(0xffd814) }
    /// Primary button hover background
    pub fn button_primary_hover() -> Rgba { rgb(0xf7ca00) }
    /// Accent button background (search orange)
    pub fn button_accent_bg() -> Rgba { rgb(0xfebd69) }
    /// Accent button hover background
    pub fn button_accent_hover() -> Rgba { rgb(0xf3a847) }
    /// Button text
    pub fn button_text() -> Rgba { rgb(0x0f1111) }
}
