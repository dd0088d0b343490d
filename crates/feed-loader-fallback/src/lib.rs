//! Fallback composition for feed loaders.
//!
//! A [`FallbackLoader`] asks its primary loader first. If the primary
//! succeeds, its items are returned and the fallback is never touched. If the
//! primary fails, its error is dropped and the fallback loader's outcome,
//! success or failure, is returned exactly as the fallback produced it.
//!
//! # Overview
//!
//! Typical uses:
//!
//! - Serving cached items when the network source is unavailable
//! - Putting a secondary mirror behind a primary feed
//! - Terminating a retry chain with a different source
//!
//! # Direct construction
//!
//! ```rust
//! use feed_loader_core::{FeedItem, FeedLoader, LoadError};
//! use feed_loader_doubles::InjectableLoader;
//! use feed_loader_fallback::FallbackLoader;
//!
//! # async fn example() {
//! let item = FeedItem::new();
//! let cache = InjectableLoader::with_items(vec![item.clone()]);
//! let network = InjectableLoader::failing(LoadError::new("offline"));
//!
//! let loader = FallbackLoader::new(network, cache);
//! assert_eq!(loader.load().await, Ok(vec![item]));
//! # }
//! ```
//!
//! # Named instances and events
//!
//! ```rust
//! use feed_loader_core::LoaderEvent;
//! use feed_loader_doubles::InjectableLoader;
//! use feed_loader_fallback::{FallbackConfig, FallbackEvent};
//! use tower_layer::Layer;
//!
//! let layer = FallbackConfig::builder()
//!     .name("cache")
//!     .on_event(|event: &FallbackEvent| {
//!         println!("{}: {}", event.pattern_name(), event.event_type());
//!     })
//!     .build()
//!     .layer(InjectableLoader::new());
//!
//! let loader = layer.layer(InjectableLoader::new());
//! assert_eq!(loader.name(), "cache");
//! ```
//!
//! # Events
//!
//! - `PrimarySucceeded`: primary succeeded, no fallback needed
//! - `PrimaryFailed`: primary failed, fallback will be attempted
//! - `Recovered`: fallback succeeded
//! - `Exhausted`: fallback failed too

mod config;
mod events;
mod layer;

pub use config::{FallbackConfig, FallbackConfigBuilder};
pub use events::FallbackEvent;
pub use layer::FallbackLayer;

use feed_loader_core::{FeedLoader, LoadFuture};
use std::fmt;
use std::sync::Arc;

/// A loader that consults `fallback` only when `primary` fails.
///
/// See the [module-level documentation](crate) for usage examples.
pub struct FallbackLoader<P, F> {
    primary: P,
    fallback: Arc<F>,
    config: Arc<FallbackConfig>,
}

impl<P, F> FallbackLoader<P, F> {
    /// Creates a fallback loader with the default configuration.
    pub fn new(primary: P, fallback: F) -> Self {
        Self::from_parts(
            primary,
            Arc::new(fallback),
            Arc::new(FallbackConfig::default()),
        )
    }

    pub(crate) fn from_parts(primary: P, fallback: Arc<F>, config: Arc<FallbackConfig>) -> Self {
        Self {
            primary,
            fallback,
            config,
        }
    }

    /// Returns the primary loader.
    pub fn primary_loader(&self) -> &P {
        &self.primary
    }

    /// Returns the fallback loader.
    pub fn fallback_loader(&self) -> &F {
        &self.fallback
    }

    /// Returns the instance name.
    pub fn name(&self) -> &str {
        &self.config.name
    }
}

impl<P, F> Clone for FallbackLoader<P, F>
where
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            primary: self.primary.clone(),
            fallback: Arc::clone(&self.fallback),
            config: Arc::clone(&self.config),
        }
    }
}

impl<P, F> fmt::Debug for FallbackLoader<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackLoader")
            .field("name", &self.config.name)
            .finish_non_exhaustive()
    }
}

impl<P, F> FeedLoader for FallbackLoader<P, F>
where
    P: FeedLoader,
    F: FeedLoader + 'static,
{
    fn load(&self) -> LoadFuture {
        let fallback = Arc::clone(&self.fallback);
        let config = Arc::clone(&self.config);

        #[cfg(feature = "tracing")]
        tracing::debug!(fallback = %config.name, "Calling primary loader");

        let primary = self.primary.load();

        Box::pin(async move {
            let error = match primary.await {
                Ok(items) => {
                    config.record_primary_success(items.len());
                    return Ok(items);
                }
                Err(error) => error,
            };

            config.record_primary_failure(error);

            match fallback.load().await {
                Ok(items) => {
                    config.record_recovery(items.len());
                    Ok(items)
                }
                Err(error) => {
                    config.record_exhaustion(&error);
                    Err(error)
                }
            }
        })
    }
}
