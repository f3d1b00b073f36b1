// Layer selectors and scroll coefficients for the landing-page scene.
// Top-edge layers move down with the scroll, bottom-edge layers move up.

// Selectors (class names from the page markup)
pub const TITLE_SELECTOR: &str = ".title";
pub const SECONDARY_BUSH_SELECTOR: &str = ".bush2";
pub const MOUNTAIN_NEAR_SELECTOR: &str = ".mountain1";
pub const MOUNTAIN_FAR_SELECTOR: &str = ".mountain2";
pub const LOGO_SELECTOR: &str = ".main_logo";

// Coefficients (px of margin per px scrolled)
pub const TITLE_COEFF: f64 = 0.5; // drifts down at half speed
pub const SECONDARY_BUSH_COEFF: f64 = 0.8;
pub const MOUNTAIN_NEAR_COEFF: f64 = 1.1;
pub const MOUNTAIN_FAR_COEFF: f64 = 1.5;
pub const LOGO_COEFF: f64 = 1.7; // fastest layer

// Number of registered layers
pub const LAYER_COUNT: usize = 5;

// Decimal places kept when writing pixel values
pub const PX_DECIMALS: i32 = 4;
