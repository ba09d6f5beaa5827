//! # teamgen_config
//!
//! Configuration for `teamgen`.
//!
//! The configuration lives at `<root>/config/config.toml`. On a fresh
//! deployment that file does not exist yet; [`provision`] clones it from
//! `<root>/config/config-example.toml` the first time it is needed and
//! leaves it alone afterwards. [`loader`] then layers `TEAMGEN_*`
//! environment overrides on top and deserializes a [`TeamgenConfig`].

pub mod error;
pub mod loader;
pub mod provision;

pub use error::ConfigError;
pub use loader::{ConfigLoader, Loaded, TeamgenConfig};
pub use provision::{ConfigPaths, Provisioned};
