//! Configuration model for mypy-annotate.
//!
//! This module defines the Config struct loaded from an optional YAML file
//! (`--config`). It supports forward-compatible parsing (unknown fields are
//! ignored), defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
