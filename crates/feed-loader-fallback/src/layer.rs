//! Tower layer for fallback.

use crate::config::FallbackConfig;
use crate::FallbackLoader;
use std::sync::Arc;
use tower_layer::Layer;

/// A Tower layer that puts a fallback loader behind any primary loader.
///
/// # Example
///
/// ```rust
/// use feed_loader_core::{FeedLoader, LoadError};
/// use feed_loader_doubles::InjectableLoader;
/// use feed_loader_fallback::FallbackLayer;
/// use tower_layer::Layer;
///
/// # async fn example() {
/// let cache = InjectableLoader::new();
/// let network = InjectableLoader::failing(LoadError::generic());
///
/// let loader = FallbackLayer::new(cache).layer(network);
/// assert!(loader.load().await.is_ok());
/// # }
/// ```
pub struct FallbackLayer<F> {
    fallback: Arc<F>,
    config: Arc<FallbackConfig>,
}

impl<F> FallbackLayer<F> {
    /// Creates a layer with the default configuration.
    pub fn new(fallback: F) -> Self {
        Self::with_config(fallback, FallbackConfig::default())
    }

    /// Creates a layer with the given configuration.
    pub fn with_config(fallback: F, config: FallbackConfig) -> Self {
        Self {
            fallback: Arc::new(fallback),
            config: Arc::new(config),
        }
    }
}

impl<F> Clone for FallbackLayer<F> {
    fn clone(&self) -> Self {
        Self {
            fallback: Arc::clone(&self.fallback),
            config: Arc::clone(&self.config),
        }
    }
}

impl<P, F> Layer<P> for FallbackLayer<F> {
    type Service = FallbackLoader<P, F>;

    fn layer(&self, primary: P) -> Self::Service {
        FallbackLoader::from_parts(
            primary,
            Arc::clone(&self.fallback),
            Arc::clone(&self.config),
        )
    }
}
