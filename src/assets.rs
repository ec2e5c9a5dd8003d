//! Embedded assets for Shopfront
//!
//! Uses rust-embed to bundle product images at compile time. Product
//! `image_url` values are paths into this bundle; the empty path resolves to
//! no asset so that a product without an image renders an empty frame.

use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "images/**/*.svg"]
#[include = "images/**/*.png"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_resolves_to_no_asset() {
        let loaded = Assets.load("").expect("empty path should not error");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_bundled_placeholder_is_present() {
        let loaded = Assets
            .load("images/product-placeholder.svg")
            .expect("placeholder should load");
        assert!(loaded.is_some());
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        assert!(Assets.load("images/missing.svg").is_err());
    }

    #[test]
    fn test_list_returns_bundled_images() {
        let files = Assets.list("images/").expect("list should not error");
        assert!(
            files
                .iter()
                .any(|f| f.as_ref() == "images/product-placeholder.svg")
        );
    }
}
