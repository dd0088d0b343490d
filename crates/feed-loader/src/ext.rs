use feed_loader_core::{FeedLoader, SharedLoader};
use feed_loader_fallback::FallbackLoader;
use std::any::Any;
use std::sync::Arc;

/// Chaining combinators available on every loader.
pub trait FeedLoaderExt: FeedLoader + Sized + 'static {
    /// Consults `other` whenever this loader fails.
    fn fallback<F>(self, other: F) -> FallbackLoader<Self, F>
    where
        F: FeedLoader + 'static,
    {
        FallbackLoader::new(self, other)
    }

    /// Attempts this loader up to `retries + 1` times per load.
    ///
    /// With zero retries the result is [`shared`](Self::shared) itself, so a
    /// [`SharedLoader`] comes back as the same `Arc`.
    fn retry(self, retries: usize) -> SharedLoader {
        feed_loader_retry::retry(self.shared(), retries)
    }

    /// Moves this loader behind a [`SharedLoader`] handle.
    ///
    /// A loader that already is a `SharedLoader` is returned as is rather
    /// than wrapped in a second `Arc`.
    fn shared(self) -> SharedLoader {
        match (&self as &dyn Any).downcast_ref::<SharedLoader>() {
            Some(shared) => Arc::clone(shared),
            None => Arc::new(self),
        }
    }

    /// Exposes this loader as a Tower service taking `()`.
    #[cfg(feature = "service")]
    fn into_service(self) -> feed_loader_core::LoaderService<Self> {
        feed_loader_core::LoaderService::new(self)
    }
}

impl<L> FeedLoaderExt for L where L: FeedLoader + 'static {}
