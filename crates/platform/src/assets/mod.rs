//! Content location, reads, and critical-asset validation.

mod locator;
mod validation;
mod xnb;

pub use locator::AssetLocator;
pub use validation::{ContentValidationResult, CriticalAsset};
pub use xnb::{normalize_asset_name, xnb_path};
