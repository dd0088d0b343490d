//! A flaky network source retried three times, then served from cache.
//!
//! Run with:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example network_with_cache
//! ```

use feed_loader::doubles::InjectableLoader;
use feed_loader::prelude::*;
use feed_loader::{FallbackConfig, FallbackEvent, LoaderEvent, RetryConfig, deliver};
use tower_layer::Layer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cache = InjectableLoader::with_items(vec![FeedItem::new(), FeedItem::new()]);
    let network = InjectableLoader::failing(LoadError::new("connection refused"));

    let retried = RetryConfig::builder()
        .name("network")
        .retries(3)
        .on_retry(|attempt| println!("network attempt {} ...", attempt))
        .build()
        .apply(network.clone().shared());

    let loader = FallbackConfig::builder()
        .name("cache")
        .on_event(|event: &FallbackEvent| {
            println!("[{}] {}", event.pattern_name(), event.event_type());
        })
        .build()
        .layer(cache.clone())
        .layer(retried);

    deliver(
        &loader,
        |items| println!("loaded {} items", items.len()),
        |error| println!("load failed: {}", error),
    )
    .await;

    println!(
        "network attempts: {}, cache reads: {}",
        network.load_count(),
        cache.load_count()
    );

    network.clear_error();
    network.set_items(vec![FeedItem::new()]);

    match loader.load().await {
        Ok(items) => println!("network back: {} fresh items", items.len()),
        Err(error) => println!("still failing: {}", error),
    }
}
