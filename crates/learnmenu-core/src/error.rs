//! Error types raised when a learn menu is configured.

use thiserror::Error;

/// Errors surfaced while building a mask or initializing a menu.
///
/// Per-frame updates never fail; only configuration does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("invalid menu configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// The reason a menu configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("candidate list is empty")]
    Empty,

    #[error("mask has {actual} entries but {expected} candidates were expected")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{len} candidates exceed the maximum of {max}")]
    TooManyCandidates { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, MenuError>;
