//! Error types for eda-plot

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Statistics error: {0}")]
    Stats(#[from] eda_stats::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Collapse a backend-specific drawing error into `Error::Render`
pub(crate) fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}
