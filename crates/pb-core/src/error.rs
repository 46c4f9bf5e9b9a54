//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `PbError` as one variant
//! via `#[from]`, so configuration problems surface unchanged at the builder.

use thiserror::Error;

/// The top-level error type for `pb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PbError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Shorthand result type for all `pb-*` crates.
pub type PbResult<T> = Result<T, PbError>;
