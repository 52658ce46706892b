//! Core error type.
//!
//! Sub-crates define their own error enums and convert into them via `From`
//! impls where a `CoreError` can surface (configuration validation).

use thiserror::Error;

/// The top-level error type for `am-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `am-core`.
pub type CoreResult<T> = Result<T, CoreError>;
