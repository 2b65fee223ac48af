//! Configuration model for chainup.
//!
//! This module defines the Config struct that represents the optional
//! `.chainup.yaml` file at the repository root. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), defaults for every field, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub use types::AmbiguousMatch;
