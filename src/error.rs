//! Error types for ScopeBoard Core
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//!
//! The extraction and table algorithms themselves are total functions and
//! signal "no data" through `Option`; `Error` only appears at the crate
//! boundary where raw payload text or catalog configuration is parsed.

use snafu::Snafu;

/// Main error type for the core library
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// JSON deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}
