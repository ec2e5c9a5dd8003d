//! Application Layer
//!
//! Contains app initialization, window management, navigation data, and the
//! storefront root view.

pub mod application;
pub mod navigation;
pub mod storefront;
