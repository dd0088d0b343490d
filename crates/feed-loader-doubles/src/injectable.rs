use feed_loader_core::{FeedItem, FeedLoader, LoadError, LoadFuture};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Preset {
    items: Vec<FeedItem>,
    error: Option<LoadError>,
}

#[derive(Debug, Default)]
struct Shared {
    preset: Mutex<Preset>,
    loads: AtomicUsize,
}

/// A loader whose outcome is set by the test.
///
/// Clones share configuration and call count, so a test can keep one handle
/// while another sits inside a composed loader, and reconfigure it between
/// calls. A configured error always wins over the configured items.
#[derive(Debug, Clone, Default)]
pub struct InjectableLoader {
    shared: Arc<Shared>,
}

impl InjectableLoader {
    /// Creates a loader that succeeds with an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader that succeeds with `items`.
    pub fn with_items(items: Vec<FeedItem>) -> Self {
        let loader = Self::new();
        loader.set_items(items);
        loader
    }

    /// Creates a loader that fails with `error`.
    pub fn failing(error: LoadError) -> Self {
        let loader = Self::new();
        loader.set_error(error);
        loader
    }

    /// Replaces the items returned on success.
    pub fn set_items(&self, items: Vec<FeedItem>) {
        self.preset().items = items;
    }

    /// Makes every following load fail with `error`.
    pub fn set_error(&self, error: LoadError) {
        self.preset().error = Some(error);
    }

    /// Removes a configured error; loads succeed with the items again.
    pub fn clear_error(&self) {
        self.preset().error = None;
    }

    /// Number of times [`load`](FeedLoader::load) has been called.
    pub fn load_count(&self) -> usize {
        self.shared.loads.load(Ordering::SeqCst)
    }

    // The preset is plain data, so a poisoned lock is still usable.
    fn preset(&self) -> MutexGuard<'_, Preset> {
        self.shared
            .preset
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FeedLoader for InjectableLoader {
    fn load(&self) -> LoadFuture {
        self.shared.loads.fetch_add(1, Ordering::SeqCst);

        let outcome = {
            let preset = self.preset();
            match &preset.error {
                Some(error) => Err(error.clone()),
                None => Ok(preset.items.clone()),
            }
        };

        Box::pin(async move { outcome })
    }
}
