//! Adapters between loaders and Tower services.
//!
//! A loader is a `Service<()>` that never applies backpressure. Going the other
//! way, any cloneable service producing items can be used wherever a
//! [`FeedLoader`] is expected, which is how remote sources plug into the
//! fallback and retry patterns.

use crate::{FeedItem, FeedLoader, LoadError, LoadFuture};
use std::task::{Context, Poll};
use tower::{Service, ServiceExt};

/// Exposes a [`FeedLoader`] as a Tower [`Service`] taking `()`.
#[derive(Debug, Clone)]
pub struct LoaderService<L> {
    loader: L,
}

impl<L> LoaderService<L> {
    /// Wraps `loader`.
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Returns a reference to the wrapped loader.
    pub fn get_ref(&self) -> &L {
        &self.loader
    }

    /// Consumes the service, returning the wrapped loader.
    pub fn into_inner(self) -> L {
        self.loader
    }
}

impl<L> Service<()> for LoaderService<L>
where
    L: FeedLoader,
{
    type Response = Vec<FeedItem>;
    type Error = LoadError;
    type Future = LoadFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: ()) -> Self::Future {
        self.loader.load()
    }
}

/// Uses a Tower [`Service`] as a [`FeedLoader`].
///
/// Each load clones the service, waits for readiness and issues one call.
#[derive(Debug, Clone)]
pub struct ServiceLoader<S> {
    inner: S,
}

impl<S> ServiceLoader<S> {
    /// Wraps `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> FeedLoader for ServiceLoader<S>
where
    S: Service<(), Response = Vec<FeedItem>, Error = LoadError> + Clone + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    fn load(&self) -> LoadFuture {
        let mut service = self.inner.clone();
        Box::pin(async move { service.ready().await?.call(()).await })
    }
}
