use crate::RetryConfig;
use feed_loader_core::{FeedLoader, SharedLoader};
use std::sync::Arc;
use tower_layer::Layer;

/// A Tower [`Layer`] that wraps a loader in a retry chain.
///
/// # Examples
///
/// ```
/// use feed_loader_core::{FeedLoader, LoadError};
/// use feed_loader_doubles::InjectableLoader;
/// use feed_loader_retry::RetryLayer;
/// use tower_layer::Layer;
///
/// # async fn example() {
/// let network = InjectableLoader::failing(LoadError::generic());
///
/// let loader = RetryLayer::builder()
///     .name("network")
///     .retries(2)
///     .build()
///     .layer()
///     .layer(network.clone());
///
/// assert!(loader.load().await.is_err());
/// assert_eq!(network.load_count(), 3);
/// # }
/// ```
#[derive(Clone)]
pub struct RetryLayer {
    config: Arc<RetryConfig>,
}

impl RetryLayer {
    /// Creates a new `RetryLayer` with the given configuration.
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new builder for configuring a retry layer.
    pub fn builder() -> crate::RetryConfigBuilder {
        crate::RetryConfigBuilder::new()
    }
}

impl<L> Layer<L> for RetryLayer
where
    L: FeedLoader + 'static,
{
    type Service = SharedLoader;

    fn layer(&self, loader: L) -> Self::Service {
        self.config.apply(Arc::new(loader))
    }
}
