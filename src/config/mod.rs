mod error;
mod params;

pub use error::ConfigError;
pub use params::{HoldoutParams, Id3Params};
