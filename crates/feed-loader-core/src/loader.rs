//! The `FeedLoader` capability.

use crate::{FeedItem, LoadError};
use futures::future::BoxFuture;
use std::sync::Arc;

/// The outcome of one load: the items, or the failure.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Future returned by [`FeedLoader::load`].
pub type LoadFuture = BoxFuture<'static, LoadResult>;

/// A loader behind shared ownership.
///
/// Composed loaders hold their children as `SharedLoader`s so the same
/// underlying loader can appear at several places in a graph.
pub type SharedLoader = Arc<dyn FeedLoader>;

/// Anything that can asynchronously produce a list of [`FeedItem`]s.
///
/// Each call to [`load`](FeedLoader::load) is independent and resolves to
/// exactly one outcome. The returned future owns everything it needs, so an
/// implementation may resolve it immediately or only after further awaits;
/// callers must not assume either.
///
/// # Example
///
/// ```
/// use feed_loader_core::{FeedItem, FeedLoader, LoadFuture};
///
/// struct Fixed(Vec<FeedItem>);
///
/// impl FeedLoader for Fixed {
///     fn load(&self) -> LoadFuture {
///         let items = self.0.clone();
///         Box::pin(async move { Ok(items) })
///     }
/// }
/// ```
pub trait FeedLoader: Send + Sync {
    /// Starts one load.
    fn load(&self) -> LoadFuture;
}

impl<L> FeedLoader for Arc<L>
where
    L: FeedLoader + ?Sized,
{
    fn load(&self) -> LoadFuture {
        (**self).load()
    }
}

impl<L> FeedLoader for Box<L>
where
    L: FeedLoader + ?Sized,
{
    fn load(&self) -> LoadFuture {
        (**self).load()
    }
}
