//! Host seams: element lookup, style writes and CSS pixel formatting.
//!
//! The browser implementations live in the web crate; tests provide fakes.

use crate::constants::PX_DECIMALS;
use crate::controller::ParallaxError;

/// An element whose inline style can be written.
pub trait StyleTarget {
    /// Set an inline style property. Failures are the host's to report.
    fn set_style_property(&self, property: &str, value: &str);
}

/// Document query facility used once at load time.
pub trait ElementLookup {
    type Element: StyleTarget;

    /// First element matching `selector`, `Ok(None)` when nothing matches.
    fn query(&self, selector: &str) -> Result<Option<Self::Element>, ParallaxError>;
}

/// Format a pixel value as a CSS length, e.g. `-110px`.
///
/// Rounds to [`PX_DECIMALS`] places so float noise such as
/// `110.00000000000001` never reaches the stylesheet, and writes negative
/// zero as `0px`.
pub fn format_px(px: f64) -> String {
    let scale = 10f64.powi(PX_DECIMALS);
    let scaled = px * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        px
    };
    if rounded == 0.0 {
        return "0px".to_string();
    }
    format!("{}px", rounded)
}
