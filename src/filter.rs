//! Per-asset eligibility decision
//!
//! Decides whether an asset should receive a generated alt-text. The
//! decision is total over well-formed input and has no side effects:
//! a missing content type means not-an-image, a missing nested alt
//! field means no existing alt-text.

use crate::storage::Asset;

/// Outcome of the eligibility check for one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The asset is an eligible image
    Process,
    /// The content type does not indicate an image
    SkipNotImage,
    /// The asset already carries an alt-text and overwrite is off
    SkipExistingAlt,
}

/// Evaluate whether an asset should be processed
///
/// # Arguments
///
/// * `asset` - The asset to check
/// * `overwrite` - Whether assets with an existing alt-text stay eligible
///
/// # Examples
///
/// ```
/// use storyblok_image_alt::filter::{evaluate, Decision};
/// use storyblok_image_alt::storage::Asset;
///
/// let mut asset = Asset::new(1, "https://a.storyblok.com/f/1/a.png");
/// asset.content_type = Some("image/png".to_string());
/// assert_eq!(evaluate(&asset, false), Decision::Process);
/// ```
pub fn evaluate(asset: &Asset, overwrite: bool) -> Decision {
    if !asset.is_image() {
        return Decision::SkipNotImage;
    }
    if asset.existing_alt().is_some() && !overwrite {
        return Decision::SkipExistingAlt;
    }
    Decision::Process
}
