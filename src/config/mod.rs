//! Guide line configuration
//!
//! Settings are read from a TOML file. Every key is optional and falls back
//! to the built-in defaults.

mod guide_config;
#[cfg(test)]
mod tests;

pub use self::guide_config::{GuideConfig, MapSettings};
