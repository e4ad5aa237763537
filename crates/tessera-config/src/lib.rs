//! Render configuration for tessera.
//!
//! A [`RenderConfig`] captures every parameter of a render, seed included, so
//! a TOML file fully reproduces its output.
//!
//! # Example
//!
//! ```rust,no_run
//! use tessera_config::RenderConfig;
//!
//! let mut config = RenderConfig::load("texture.toml").unwrap();
//! config.segment_count = 12;
//! config.validate().unwrap();
//!
//! let composition = config.composition();
//! config.save("texture-long.toml").unwrap();
//! ```

mod error;
mod render;

pub use error::ConfigError;
pub use render::{DEFAULT_SEED, Method, RenderConfig};
