use feed_loader_core::{FeedLoader, LoadFuture, SharedLoader};
use std::fmt;

/// A loader that forwards every call to another loader unchanged.
#[derive(Clone)]
pub struct LoaderProxy {
    inner: SharedLoader,
}

impl LoaderProxy {
    /// Creates a proxy in front of `inner`.
    pub fn new(inner: SharedLoader) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for LoaderProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderProxy").finish_non_exhaustive()
    }
}

impl FeedLoader for LoaderProxy {
    fn load(&self) -> LoadFuture {
        self.inner.load()
    }
}
