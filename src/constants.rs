//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 768.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Navbar height in pixels
pub const NAVBAR_HEIGHT: f32 = 56.0;

/// Product image footprint (square)
pub const PRODUCT_IMAGE_SIZE: f32 = 200.0;

/// Product card width
pub const PRODUCT_CARD_WIDTH: f32 = 280.0;

/// Currency symbol shown before the price string
pub const CURRENCY_SYMBOL: &str = "$";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_symbol_is_dollar() {
        // Every price on the page renders behind this prefix.
        assert_eq!(CURRENCY_SYMBOL, "$");
    }

    #[test]
    fn test_window_minimums_do_not_exceed_defaults() {
        // Default dimensions must survive settings clamping unchanged.
        assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
        assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
    }
}
