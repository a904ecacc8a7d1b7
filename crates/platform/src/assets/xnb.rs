//! Compiled engine content (`.xnb`) lookup.
//!
//! Decoding is left to the engine; this only maps engine asset names to
//! streams under `Content/XNBs/`.

use std::fs::File;

use super::locator::AssetLocator;
use crate::error::Result;
use crate::logging::Severity;

const CATEGORY: &str = "ContentManager";
const XNB_DIR: &str = "XNBs";

/// Normalize an engine asset name: forward slashes, no `.xnb`, trimmed.
pub fn normalize_asset_name(asset_name: &str) -> String {
    asset_name
        .replace('\\', "/")
        .replace(".xnb", "")
        .trim()
        .to_string()
}

/// Content-relative path of the compiled asset for `asset_name`.
pub fn xnb_path(asset_name: &str) -> String {
    format!("{XNB_DIR}/{}.xnb", normalize_asset_name(asset_name))
}

impl AssetLocator {
    /// Open the compiled `.xnb` stream backing an engine asset name.
    pub fn open_xnb(&self, asset_name: &str) -> Result<File> {
        let path = xnb_path(asset_name);
        self.logger().log(
            Severity::Debug,
            CATEGORY,
            format!("Loading asset: {asset_name} -> {path}"),
        );
        self.open_stream(&path)
    }
}
