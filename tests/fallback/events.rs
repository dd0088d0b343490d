//! Tests for fallback event emission.

use feed_loader::doubles::InjectableLoader;
use feed_loader::{FallbackConfig, FallbackEvent, FeedItem, FeedLoader, LoadError, LoaderEvent};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tower_layer::Layer;

fn recording_config(name: &str) -> (FallbackConfig, Arc<Mutex<Vec<FallbackEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);

    let config = FallbackConfig::builder()
        .name(name)
        .on_event(move |event: &FallbackEvent| sink.lock().unwrap().push(event.clone()))
        .build();

    (config, events)
}

#[tokio::test]
async fn test_primary_success_event() {
    let (config, events) = recording_config("feed");
    let loader = config
        .layer(InjectableLoader::new())
        .layer(InjectableLoader::with_items(vec![FeedItem::new(), FeedItem::new()]));

    let _ = loader.load().await;

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        FallbackEvent::PrimarySucceeded { pattern_name, items: 2, .. } if pattern_name == "feed"
    ));
}

#[tokio::test]
async fn test_recovered_event_carries_primary_error() {
    let (config, events) = recording_config("feed");
    let loader = config
        .layer(InjectableLoader::with_items(vec![FeedItem::new()]))
        .layer(InjectableLoader::failing(LoadError::new("timeout")));

    let _ = loader.load().await;

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        FallbackEvent::PrimaryFailed { error, .. } if error.message() == "timeout"
    ));
    assert!(matches!(&events[1], FallbackEvent::Recovered { items: 1, .. }));
}

#[tokio::test]
async fn test_exhausted_event_carries_fallback_error() {
    let (config, events) = recording_config("feed");
    let loader = config
        .layer(InjectableLoader::failing(LoadError::new("cache miss")))
        .layer(InjectableLoader::failing(LoadError::new("timeout")));

    let _ = loader.load().await;

    let events = events.lock().unwrap();
    let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
    assert_eq!(types, vec!["primary_failed", "exhausted"]);
    assert!(matches!(
        &events[1],
        FallbackEvent::Exhausted { error, .. } if error.message() == "cache miss"
    ));
}

#[tokio::test]
async fn test_event_timestamps_are_ordered() {
    let before = Instant::now();
    let (config, events) = recording_config("feed");
    let loader = config
        .layer(InjectableLoader::new())
        .layer(InjectableLoader::failing(LoadError::generic()));

    let _ = loader.load().await;

    let events = events.lock().unwrap();
    assert!(events[0].timestamp() >= before);
    assert!(events[1].timestamp() >= events[0].timestamp());
}

#[tokio::test]
async fn test_panicking_listener_does_not_change_outcome() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cc = Arc::clone(&calls);
    let item = FeedItem::new();

    let loader = FallbackConfig::builder()
        .on_event(|_: &FallbackEvent| panic!("listener bug"))
        .on_event(move |_: &FallbackEvent| {
            cc.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .layer(InjectableLoader::with_items(vec![item.clone()]))
        .layer(InjectableLoader::failing(LoadError::generic()));

    assert_eq!(loader.load().await, Ok(vec![item]));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
