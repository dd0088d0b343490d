//! Composable feed loaders with fallback and retry.
//!
//! `feed-loader` re-exports the pattern crates and adds [`FeedLoaderExt`], the
//! chaining API used to build loader graphs:
//!
//! ```rust
//! use feed_loader::prelude::*;
//! use feed_loader_doubles::InjectableLoader;
//!
//! # async fn example() {
//! let item = FeedItem::new();
//! let cache = InjectableLoader::with_items(vec![item.clone()]);
//! let network = InjectableLoader::failing(LoadError::new("offline"));
//!
//! let loader = network.clone().retry(3).fallback(cache);
//!
//! assert_eq!(loader.load().await, Ok(vec![item]));
//! assert_eq!(network.load_count(), 4);
//! # }
//! ```
//!
//! # Features
//!
//! - `doubles`: test doubles ([`doubles::InjectableLoader`], [`doubles::LoaderProxy`])
//! - `service`: Tower `Service` adapters
//! - `metrics`: fallback counters
//! - `tracing`: diagnostic logging
//! - `full`: all of the above

pub use feed_loader_core::{
    deliver, FeedItem, FeedLoader, LoadError, LoadFuture, LoadResult, LoaderEvent, SharedLoader,
};
#[cfg(feature = "service")]
pub use feed_loader_core::{LoaderService, ServiceLoader};

pub use feed_loader_fallback as fallback;
pub use feed_loader_fallback::{FallbackConfig, FallbackEvent, FallbackLayer, FallbackLoader};

pub use feed_loader_retry as retry;
pub use feed_loader_retry::{RetryConfig, RetryLayer};

#[cfg(feature = "doubles")]
pub use feed_loader_doubles as doubles;

mod ext;

pub use ext::FeedLoaderExt;

/// Everything needed to build and call loaders.
pub mod prelude {
    pub use crate::FeedLoaderExt;
    pub use feed_loader_core::{FeedItem, FeedLoader, LoadError, SharedLoader};
}
