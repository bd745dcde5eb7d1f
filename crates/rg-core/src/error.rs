//! Core error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{name} = {value} is outside {expected}")]
    OutOfRange {
        name:     &'static str,
        value:    f64,
        expected: &'static str,
    },
}

/// Shorthand result type for `rg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
