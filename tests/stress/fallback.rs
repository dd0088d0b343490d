//! Fallback stress tests

use super::ConcurrencyTracker;
use feed_loader::doubles::InjectableLoader;
use feed_loader::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Test: 1 million loads through a fallback (all succeed, no fallback triggered)
#[tokio::test]
#[ignore]
async fn stress_one_million_loads_no_fallback() {
    let network = InjectableLoader::with_items(vec![FeedItem::new()]);
    let cache = InjectableLoader::new();
    let loader = network.clone().fallback(cache.clone());

    let start = Instant::now();

    for _ in 0..1_000_000 {
        assert!(loader.load().await.is_ok());
    }

    let elapsed = start.elapsed();
    println!("1M loads (no fallback) completed in {:?}", elapsed);
    println!(
        "Throughput: {:.0} loads/sec",
        1_000_000.0 / elapsed.as_secs_f64()
    );

    assert_eq!(network.load_count(), 1_000_000);
    assert_eq!(cache.load_count(), 0);
}

/// Test: High volume with every load falling back
#[tokio::test]
#[ignore]
async fn stress_high_volume_all_fallback() {
    let network = InjectableLoader::failing(LoadError::generic());
    let cache = InjectableLoader::with_items(vec![FeedItem::new()]);
    let loader = network.clone().fallback(cache.clone());

    let start = Instant::now();

    for _ in 0..100_000 {
        assert_eq!(loader.load().await.map(|items| items.len()), Ok(1));
    }

    println!("100k loads (all fallback) completed in {:?}", start.elapsed());

    assert_eq!(network.load_count(), 100_000);
    assert_eq!(cache.load_count(), 100_000);
}

/// Test: Concurrent loads through one shared graph
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn stress_concurrent_shared_graph() {
    let network = InjectableLoader::failing(LoadError::generic());
    let cache = InjectableLoader::with_items(vec![FeedItem::new()]);
    let loader = network.clone().fallback(cache.clone()).shared();
    let tracker = ConcurrencyTracker::new();

    let handles: Vec<_> = (0..10_000)
        .map(|_| {
            let loader = Arc::clone(&loader);
            let tracker = Arc::clone(&tracker);
            tokio::spawn(async move {
                tracker.enter();
                let result = loader.load().await;
                tracker.exit();
                result
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    println!("Peak concurrent loads: {}", tracker.peak());
    assert_eq!(network.load_count(), 10_000);
    assert_eq!(cache.load_count(), 10_000);
}
