//! The error signal shared by every loader.
//!
//! Loaders do not distinguish failure causes: a network outage, an empty cache
//! and a validation failure are all a [`LoadError`]. Composition never looks
//! inside the error; the message exists for logs and test assertions.

use std::borrow::Cow;
use thiserror::Error;

/// An opaque "the load failed" marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: Cow<'static, str>,
}

impl LoadError {
    /// Creates an error with a diagnostic message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates the generic failure with no further detail.
    pub fn generic() -> Self {
        Self::new("feed load failed")
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for LoadError {
    fn default() -> Self {
        Self::generic()
    }
}
