//! Observing composed loaders.
//!
//! A composed loader reports each step of a call (which loader ran and how
//! it ended) as a [`LoaderEvent`]. Listeners are registered on the loader's
//! configuration and are called synchronously, in registration order, from
//! inside the load.
//!
//! Listeners cannot influence a load. A listener that panics is skipped and
//! the remaining listeners still see the event.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// One step of a composed load.
pub trait LoaderEvent: Send + Sync + fmt::Debug {
    /// Short snake_case tag, e.g. `"primary_failed"`.
    fn event_type(&self) -> &'static str;

    /// When the step happened.
    fn timestamp(&self) -> Instant;

    /// Name of the loader instance that reported the step.
    fn pattern_name(&self) -> &str;

    /// Whether the step records a failed load.
    fn is_failure(&self) -> bool {
        false
    }
}

/// Receives the events of a composed loader.
pub trait EventListener<E: LoaderEvent>: Send + Sync {
    /// Called once per event.
    fn on_event(&self, event: &E);
}

/// A listener shared between configurations.
pub type SharedListener<E> = Arc<dyn EventListener<E>>;

/// The listeners registered on one loader configuration.
pub struct EventListeners<E: LoaderEvent> {
    listeners: Vec<SharedListener<E>>,
}

impl<E: LoaderEvent> EventListeners<E> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers `listener` after the existing ones.
    pub fn add<L>(&mut self, listener: L)
    where
        L: EventListener<E> + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Registers every listener of `other`, sharing rather than copying them.
    pub fn extend_from(&mut self, other: &EventListeners<E>) {
        self.listeners.extend(other.listeners.iter().map(Arc::clone));
    }

    /// Delivers `event` to each listener in registration order.
    pub fn emit(&self, event: &E) {
        self.listeners.iter().for_each(|listener| {
            let _ = panic::catch_unwind(AssertUnwindSafe(|| listener.on_event(event)));
        });
    }

    /// Returns true if nothing is listening.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl<E: LoaderEvent> Clone for EventListeners<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl<E: LoaderEvent> Default for EventListeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LoaderEvent> fmt::Debug for EventListeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}

/// Adapts a closure into an [`EventListener`].
pub struct FnListener<E, F>
where
    F: Fn(&E) + Send + Sync,
{
    f: F,
    _event: std::marker::PhantomData<fn(&E)>,
}

impl<E, F> FnListener<E, F>
where
    F: Fn(&E) + Send + Sync,
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _event: std::marker::PhantomData,
        }
    }
}

impl<E, F> EventListener<E> for FnListener<E, F>
where
    E: LoaderEvent,
    F: Fn(&E) + Send + Sync,
{
    fn on_event(&self, event: &E) {
        (self.f)(event)
    }
}
