//! Callback-style delivery of a load outcome.

use crate::{FeedItem, FeedLoader, LoadError};

/// Runs one load and hands the outcome to exactly one of two callbacks.
///
/// `on_success` receives the items, `on_failure` the error. Whichever branch
/// the loader resolves to, the other callback is dropped without being called.
///
/// # Example
///
/// ```
/// use feed_loader_core::{deliver, FeedItem, FeedLoader, LoadFuture};
///
/// struct Empty;
///
/// impl FeedLoader for Empty {
///     fn load(&self) -> LoadFuture {
///         Box::pin(async { Ok(Vec::new()) })
///     }
/// }
///
/// # async fn example() {
/// deliver(
///     &Empty,
///     |items: Vec<FeedItem>| assert!(items.is_empty()),
///     |_| unreachable!("empty loader never fails"),
/// )
/// .await;
/// # }
/// ```
pub async fn deliver<L, S, F>(loader: &L, on_success: S, on_failure: F)
where
    L: FeedLoader + ?Sized,
    S: FnOnce(Vec<FeedItem>),
    F: FnOnce(LoadError),
{
    match loader.load().await {
        Ok(items) => on_success(items),
        Err(error) => on_failure(error),
    }
}
