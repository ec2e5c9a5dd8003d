//! Domain - Product Display Data
//!
//! Plain data types passed into the UI components. Nothing here touches
//! services or does I/O.

pub mod catalog;
pub mod product;
