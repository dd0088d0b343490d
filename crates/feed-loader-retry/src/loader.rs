//! The loader produced by a retry chain.

use feed_loader_core::{FeedLoader, LoadFuture, SharedLoader};
use feed_loader_fallback::FallbackConfig;
use std::fmt;
use std::sync::Arc;

/// Runs the links of a retry chain as a loop.
///
/// Link `k` behaves like a fallback whose primary is links `1..k` and whose
/// fallback is `loader`: it sees the outcome of attempt `k`, and on failure
/// runs attempt `k + 1`. Events and metrics are reported per link, under the
/// link's own name, exactly as a nested fallback would report them. Neither
/// loading nor dropping recurses, so the depth of the chain is bounded only
/// by memory.
pub(crate) struct RetryLoader {
    loader: SharedLoader,
    links: Arc<[FallbackConfig]>,
}

impl RetryLoader {
    pub(crate) fn new(loader: SharedLoader, links: Vec<FallbackConfig>) -> Self {
        Self {
            loader,
            links: links.into(),
        }
    }
}

impl fmt::Debug for RetryLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryLoader")
            .field("links", &self.links.len())
            .finish_non_exhaustive()
    }
}

impl FeedLoader for RetryLoader {
    fn load(&self) -> LoadFuture {
        let loader = Arc::clone(&self.loader);
        let links = Arc::clone(&self.links);

        #[cfg(feature = "tracing")]
        tracing::debug!(links = links.len(), "Calling retried loader");

        let first = loader.load();

        Box::pin(async move {
            let mut outcome = first.await;

            for link in links.iter() {
                outcome = match outcome {
                    Ok(items) => {
                        link.record_primary_success(items.len());
                        Ok(items)
                    }
                    Err(error) => {
                        link.record_primary_failure(error);

                        match loader.load().await {
                            Ok(items) => {
                                link.record_recovery(items.len());
                                Ok(items)
                            }
                            Err(error) => {
                                link.record_exhaustion(&error);
                                Err(error)
                            }
                        }
                    }
                };
            }

            outcome
        })
    }
}
