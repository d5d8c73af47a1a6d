//! Configuration: environment-driven settings plus the defaults they fall
//! back to.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
