//! Retry composition for feed loaders.
//!
//! Retrying here is structural: `retry(loader, n)` is a chain of `n`
//! fallback links, each falling back to the same `loader`. A call therefore
//! attempts `loader` up to `n + 1` times, stops at the first success, and
//! otherwise returns the error of the last attempt. There is no delay between
//! attempts. The chain runs as a flat loop, so `n` may be arbitrarily large.
//!
//! Retrying does not change where a chain finally falls back to; compose an
//! outer fallback for that.
//!
//! # Examples
//!
//! ```
//! use feed_loader_core::{FeedItem, FeedLoader, LoadError};
//! use feed_loader_doubles::InjectableLoader;
//! use feed_loader_fallback::FallbackLoader;
//! use feed_loader_retry::retry;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let item = FeedItem::new();
//! let cache = InjectableLoader::with_items(vec![item.clone()]);
//! let network = InjectableLoader::failing(LoadError::new("offline"));
//!
//! let loader = FallbackLoader::new(retry(Arc::new(network.clone()), 3), cache);
//!
//! assert_eq!(loader.load().await, Ok(vec![item]));
//! assert_eq!(network.load_count(), 4);
//! # }
//! ```

mod config;
mod layer;
mod loader;

pub use config::{RetryConfig, RetryConfigBuilder};
pub use layer::RetryLayer;

use feed_loader_core::SharedLoader;

/// Attempts `loader` up to `retries + 1` times per load.
///
/// With `retries == 0` the same `loader` is returned.
pub fn retry(loader: SharedLoader, retries: usize) -> SharedLoader {
    RetryConfig::builder().retries(retries).build().apply(loader)
}
