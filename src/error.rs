//! Error types for style derivation.

use thiserror::Error;

/// Errors raised while turning a [`StyleRequest`](crate::models::StyleRequest)
/// into a [`StyleProfile`](crate::profile::StyleProfile).
///
/// Every variant is fail-fast: the caller fixes the request and tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl StyleError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        StyleError::InvalidConfiguration(msg.into())
    }
}

/// Convenience alias used throughout the style layer.
pub type Result<T> = std::result::Result<T, StyleError>;
