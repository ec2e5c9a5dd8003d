//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O. Each renders
//! the same output for the same inputs.

pub mod button;
pub mod navbar;
pub mod product_card;
