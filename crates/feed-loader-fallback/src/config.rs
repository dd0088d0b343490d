//! Configuration for the fallback loader.

use crate::{FallbackEvent, FallbackLayer};
use feed_loader_core::{EventListeners, FnListener, LoadError};
use std::time::Instant;

#[cfg(feature = "metrics")]
use metrics::{counter, describe_counter};

#[cfg(feature = "metrics")]
use std::sync::Once;

#[cfg(feature = "metrics")]
static METRICS_INIT: Once = Once::new();

/// Configuration shared by every [`FallbackLoader`](crate::FallbackLoader)
/// built from the same layer.
pub struct FallbackConfig {
    pub(crate) name: String,
    pub(crate) event_listeners: EventListeners<FallbackEvent>,
}

impl FallbackConfig {
    /// Creates a new builder for configuring a fallback.
    pub fn builder() -> FallbackConfigBuilder {
        FallbackConfigBuilder::new()
    }

    /// Returns the instance name used in events, logs and metrics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a layer that falls back to `fallback` using this configuration.
    pub fn layer<F>(self, fallback: F) -> FallbackLayer<F> {
        FallbackLayer::with_config(fallback, self)
    }

    /// Records a primary success: emits `PrimarySucceeded` and counts a
    /// `success` call.
    pub fn record_primary_success(&self, items: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(fallback = %self.name, items, "Primary loader succeeded");

        #[cfg(feature = "metrics")]
        counter!(
            "feed_fallback_calls_total",
            "fallback" => self.name.clone(),
            "result" => "success"
        )
        .increment(1);

        self.event_listeners.emit(&FallbackEvent::PrimarySucceeded {
            pattern_name: self.name.clone(),
            timestamp: Instant::now(),
            items,
        });
    }

    /// Records a primary failure: emits `PrimaryFailed` before the fallback
    /// loader runs. Nothing is counted until the fallback resolves.
    pub fn record_primary_failure(&self, error: LoadError) {
        #[cfg(feature = "tracing")]
        tracing::debug!(fallback = %self.name, %error, "Primary loader failed, calling fallback");

        self.event_listeners.emit(&FallbackEvent::PrimaryFailed {
            pattern_name: self.name.clone(),
            timestamp: Instant::now(),
            error,
        });
    }

    /// Records a fallback success: emits `Recovered` and counts a
    /// `recovered` call.
    pub fn record_recovery(&self, items: usize) {
        #[cfg(feature = "metrics")]
        counter!(
            "feed_fallback_calls_total",
            "fallback" => self.name.clone(),
            "result" => "recovered"
        )
        .increment(1);

        self.event_listeners.emit(&FallbackEvent::Recovered {
            pattern_name: self.name.clone(),
            timestamp: Instant::now(),
            items,
        });
    }

    /// Records a fallback failure: emits `Exhausted` and counts an
    /// `exhausted` call.
    pub fn record_exhaustion(&self, error: &LoadError) {
        #[cfg(feature = "tracing")]
        tracing::warn!(fallback = %self.name, %error, "Fallback loader also failed");

        #[cfg(feature = "metrics")]
        counter!(
            "feed_fallback_calls_total",
            "fallback" => self.name.clone(),
            "result" => "exhausted"
        )
        .increment(1);

        self.event_listeners.emit(&FallbackEvent::Exhausted {
            pattern_name: self.name.clone(),
            timestamp: Instant::now(),
            error: error.clone(),
        });
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        FallbackConfigBuilder::new().build()
    }
}

/// Builder for [`FallbackConfig`].
pub struct FallbackConfigBuilder {
    name: String,
    event_listeners: EventListeners<FallbackEvent>,
}

impl Default for FallbackConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackConfigBuilder {
    /// Creates a new builder with default settings.
    ///
    /// Defaults:
    /// - name: `"fallback"`
    /// - no event listeners
    pub fn new() -> Self {
        Self {
            name: "fallback".to_string(),
            event_listeners: EventListeners::new(),
        }
    }

    /// Sets the name for this fallback instance (used in metrics and events).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an event listener.
    pub fn on_event<F>(mut self, listener: F) -> Self
    where
        F: Fn(&FallbackEvent) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(listener));
        self
    }

    /// Adds every listener from an existing collection.
    pub fn listeners(mut self, listeners: &EventListeners<FallbackEvent>) -> Self {
        self.event_listeners.extend_from(listeners);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> FallbackConfig {
        #[cfg(feature = "metrics")]
        METRICS_INIT.call_once(|| {
            describe_counter!(
                "feed_fallback_calls_total",
                "Total number of loads through a fallback loader"
            );
        });

        FallbackConfig {
            name: self.name,
            event_listeners: self.event_listeners,
        }
    }
}
