//! Events emitted by the fallback loader.

use feed_loader_core::{LoadError, LoaderEvent};
use std::time::Instant;

/// Events emitted by [`FallbackLoader`](crate::FallbackLoader).
#[derive(Debug, Clone)]
pub enum FallbackEvent {
    /// The primary loader succeeded; the fallback was not consulted.
    PrimarySucceeded {
        /// Name of the fallback instance.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Number of items the primary returned.
        items: usize,
    },

    /// The primary loader failed; the fallback loader runs next.
    PrimaryFailed {
        /// Name of the fallback instance.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// The discarded primary error.
        error: LoadError,
    },

    /// The fallback loader succeeded after the primary failed.
    Recovered {
        /// Name of the fallback instance.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// Number of items the fallback returned.
        items: usize,
    },

    /// The fallback loader failed as well; its error is returned.
    Exhausted {
        /// Name of the fallback instance.
        pattern_name: String,
        /// When the event occurred.
        timestamp: Instant,
        /// The error handed to the caller.
        error: LoadError,
    },
}

impl LoaderEvent for FallbackEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::PrimarySucceeded { .. } => "primary_succeeded",
            Self::PrimaryFailed { .. } => "primary_failed",
            Self::Recovered { .. } => "recovered",
            Self::Exhausted { .. } => "exhausted",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            Self::PrimarySucceeded { timestamp, .. }
            | Self::PrimaryFailed { timestamp, .. }
            | Self::Recovered { timestamp, .. }
            | Self::Exhausted { timestamp, .. } => *timestamp,
        }
    }

    fn pattern_name(&self) -> &str {
        match self {
            Self::PrimarySucceeded { pattern_name, .. }
            | Self::PrimaryFailed { pattern_name, .. }
            | Self::Recovered { pattern_name, .. }
            | Self::Exhausted { pattern_name, .. } => pattern_name,
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, Self::PrimaryFailed { .. } | Self::Exhausted { .. })
    }
}
