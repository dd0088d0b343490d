//! Fallback metrics regression tests

use super::helpers::*;
use feed_loader::doubles::InjectableLoader;
use feed_loader::{FallbackConfig, FeedItem, FeedLoader, LoadError};
use serial_test::serial;
use tower_layer::Layer;

#[tokio::test]
#[serial]
async fn fallback_success_metrics() {
    init_recorder();

    let loader = FallbackConfig::builder()
        .name("metrics_primary_ok")
        .build()
        .layer(InjectableLoader::new())
        .layer(InjectableLoader::with_items(vec![FeedItem::new()]));

    let _ = loader.load().await;

    assert_counter_exists("feed_fallback_calls_total");
    assert_metric_has_label("feed_fallback_calls_total", "fallback", "metrics_primary_ok");
    assert_metric_has_label("feed_fallback_calls_total", "result", "success");
}

#[tokio::test]
#[serial]
async fn fallback_recovered_metrics() {
    init_recorder();

    let loader = FallbackConfig::builder()
        .name("metrics_recovered")
        .build()
        .layer(InjectableLoader::new())
        .layer(InjectableLoader::failing(LoadError::generic()));

    let _ = loader.load().await;

    assert_metric_has_label("feed_fallback_calls_total", "fallback", "metrics_recovered");
    assert_metric_has_label("feed_fallback_calls_total", "result", "recovered");
}

#[tokio::test]
#[serial]
async fn fallback_exhausted_metrics() {
    init_recorder();

    let loader = FallbackConfig::builder()
        .name("metrics_exhausted")
        .build()
        .layer(InjectableLoader::failing(LoadError::generic()))
        .layer(InjectableLoader::failing(LoadError::generic()));

    let _ = loader.load().await;

    assert_metric_has_label("feed_fallback_calls_total", "fallback", "metrics_exhausted");
    assert_metric_has_label("feed_fallback_calls_total", "result", "exhausted");
}
