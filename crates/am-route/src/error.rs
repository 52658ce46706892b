//! Route error type.

use thiserror::Error;

use am_core::Coordinate;

/// Errors produced by route providers.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: Coordinate, to: Coordinate },

    #[error("polyline parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
