//! Errors for the harness around the classifiers.
//!
//! The classifiers themselves never fail; they answer `false`.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid integer pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
