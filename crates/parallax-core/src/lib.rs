pub mod constants;
pub mod controller;
pub mod layers;
pub mod style;

pub use constants::*;
pub use controller::*;
pub use layers::*;
pub use style::*;
