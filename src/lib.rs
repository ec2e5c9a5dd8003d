//! Shopfront Library
//!
//! This crate provides the main application logic for Shopfront, a small
//! storefront desktop app: a navbar with search, and a page of product cards.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod settings;
pub mod theme;
