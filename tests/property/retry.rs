//! Property tests for the retry pattern.
//!
//! Invariants tested:
//! - A failing loader is attempted exactly retries + 1 times
//! - An outer fallback always recovers a failing loader
//! - Success on the Nth attempt stops retrying

use super::items;
use feed_loader::doubles::InjectableLoader;
use feed_loader::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Runtime;

/// Fails until its `succeed_on`-th call.
struct EventuallyOk {
    calls: AtomicUsize,
    succeed_on: usize,
}

impl FeedLoader for EventuallyOk {
    fn load(&self) -> feed_loader::LoadFuture {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = if call >= self.succeed_on {
            Ok(Vec::new())
        } else {
            Err(LoadError::generic())
        };
        Box::pin(async move { outcome })
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: retry(n) then fallback always yields the cache, after n + 1 attempts
    #[test]
    fn retry_then_fallback_attempts_n_plus_one(retries in 0usize..=16, cache_len in 0usize..8) {
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let cached = items(cache_len);
            let cache = InjectableLoader::with_items(cached.clone());
            let network = InjectableLoader::failing(LoadError::generic());

            let loader = network.clone().retry(retries).fallback(cache.clone());

            prop_assert_eq!(loader.load().await, Ok(cached));
            prop_assert_eq!(network.load_count(), retries + 1);
            prop_assert_eq!(cache.load_count(), 1);

            Ok(())
        })?;
    }

    /// Property: success on the Nth attempt stops retrying
    #[test]
    fn retry_stops_on_success(retries in 1usize..=10, succeed_on in 1usize..=11) {
        if succeed_on > retries + 1 {
            return Ok(());
        }

        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let loader = Arc::new(EventuallyOk {
                calls: AtomicUsize::new(0),
                succeed_on,
            });

            let composed = feed_loader::retry::retry(loader.clone(), retries);

            prop_assert!(composed.load().await.is_ok(), "Should succeed on attempt {}", succeed_on);
            prop_assert_eq!(loader.calls.load(Ordering::SeqCst), succeed_on);

            Ok(())
        })?;
    }
}
