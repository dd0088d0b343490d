//! Core infrastructure for feed-loader.
//!
//! This crate provides the pieces every loader pattern builds on:
//! - The [`FeedLoader`] capability and the shared [`SharedLoader`] handle
//! - [`FeedItem`] and the opaque [`LoadError`]
//! - Callback-style delivery of a load outcome
//! - Event system for observability
//! - Tower adapters (`service` feature)

pub mod callback;
pub mod error;
pub mod events;
pub mod item;
pub mod loader;
#[cfg(feature = "service")]
pub mod service;

pub use callback::deliver;
pub use error::LoadError;
pub use events::{EventListener, EventListeners, FnListener, LoaderEvent};
pub use item::FeedItem;
pub use loader::{FeedLoader, LoadFuture, LoadResult, SharedLoader};
#[cfg(feature = "service")]
pub use service::{LoaderService, ServiceLoader};
