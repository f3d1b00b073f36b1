// Host-side tests for constants.
// The web crate is wasm-only, so we include its pure-Rust constants directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use parallax_core::constants::*;
use web_constants::*;

#[test]
fn selectors_are_class_selectors() {
    for sel in [
        TITLE_SELECTOR,
        SECONDARY_BUSH_SELECTOR,
        MOUNTAIN_NEAR_SELECTOR,
        MOUNTAIN_FAR_SELECTOR,
        LOGO_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
        assert!(sel.len() > 1);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn coefficients_are_positive() {
    assert!(TITLE_COEFF > 0.0);
    assert!(SECONDARY_BUSH_COEFF > 0.0);
    assert!(MOUNTAIN_NEAR_COEFF > 0.0);
    assert!(MOUNTAIN_FAR_COEFF > 0.0);
    assert!(LOGO_COEFF > 0.0);
    assert!(PX_DECIMALS >= 0);
}

#[test]
fn web_constants() {
    assert_eq!(SCROLL_EVENT, "scroll");
    assert_eq!(LOG_LEVEL, log::Level::Info);
}
