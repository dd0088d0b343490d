use crate::loader::RetryLoader;
use crate::RetryLayer;
use feed_loader_core::{EventListeners, FnListener, SharedLoader};
use feed_loader_fallback::{FallbackConfig, FallbackEvent};
use std::sync::Arc;

pub(crate) type RetryFn = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for a retry chain.
pub struct RetryConfig {
    pub(crate) retries: usize,
    pub(crate) name: String,
    pub(crate) event_listeners: EventListeners<FallbackEvent>,
    pub(crate) on_retry: Option<RetryFn>,
}

impl RetryConfig {
    /// Creates a new builder for configuring retries.
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Number of extra attempts after the first.
    pub fn retries(&self) -> usize {
        self.retries
    }

    /// Creates a Tower layer applying this configuration.
    pub fn layer(self) -> RetryLayer {
        RetryLayer::new(self)
    }

    /// Builds the retry chain around `loader`.
    ///
    /// Each of the `retries` links acts as a fallback whose primary is the
    /// chain so far and whose fallback is `loader` itself, so a call attempts
    /// `loader` up to `retries + 1` times. With zero retries `loader` is
    /// returned as is.
    pub fn apply(&self, loader: SharedLoader) -> SharedLoader {
        if self.retries == 0 {
            return loader;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(retry = %self.name, retries = self.retries, "Building retry chain");

        let links = (1..=self.retries)
            .map(|link| {
                let mut builder = FallbackConfig::builder()
                    .name(format!("{}#{}", self.name, link))
                    .listeners(&self.event_listeners);

                if let Some(on_retry) = &self.on_retry {
                    let on_retry = Arc::clone(on_retry);
                    builder = builder.on_event(move |event: &FallbackEvent| {
                        if let FallbackEvent::PrimaryFailed { .. } = event {
                            on_retry(link + 1);
                        }
                    });
                }

                builder.build()
            })
            .collect();

        Arc::new(RetryLoader::new(loader, links))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfigBuilder::new().build()
    }
}

/// Builder for [`RetryConfig`].
pub struct RetryConfigBuilder {
    retries: usize,
    name: String,
    event_listeners: EventListeners<FallbackEvent>,
    on_retry: Option<RetryFn>,
}

impl Default for RetryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfigBuilder {
    /// Creates a new builder with defaults.
    ///
    /// Defaults:
    /// - retries: 0
    /// - name: `"retry"`
    pub fn new() -> Self {
        Self {
            retries: 0,
            name: "retry".to_string(),
            event_listeners: EventListeners::new(),
            on_retry: None,
        }
    }

    /// Sets the number of retries.
    ///
    /// This excludes the initial attempt, so `retries(3)` means one initial
    /// attempt plus three retries.
    pub fn retries(mut self, retries: usize) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the name for this retry instance.
    ///
    /// Link `k` of the chain is named `"{name}#{k}"`, counting from the
    /// innermost link.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a listener receiving the fallback events of every link.
    pub fn on_event<F>(mut self, listener: F) -> Self
    where
        F: Fn(&FallbackEvent) + Send + Sync + 'static,
    {
        self.event_listeners.add(FnListener::new(listener));
        self
    }

    /// Registers a callback invoked before each retry.
    ///
    /// # Callback Signature
    /// `Fn(usize)` - Called with the number of the attempt about to run
    /// (2 for the first retry).
    pub fn on_retry<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_retry = Some(Arc::new(f));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> RetryConfig {
        RetryConfig {
            retries: self.retries,
            name: self.name,
            event_listeners: self.event_listeners,
            on_retry: self.on_retry,
        }
    }
}
