//! Test doubles for feed loaders.
//!
//! - [`InjectableLoader`]: returns whatever items or error a test configures,
//!   and counts how often it was asked.
//! - [`LoaderProxy`]: forwards to another loader, so test setup can hand a
//!   [`SharedLoader`](feed_loader_core::SharedLoader) to the system under test
//!   instead of the concrete double.
//!
//! ```
//! use feed_loader_core::{FeedLoader, LoadError};
//! use feed_loader_doubles::{InjectableLoader, LoaderProxy};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let double = InjectableLoader::new();
//! let sut = LoaderProxy::new(Arc::new(double.clone()));
//!
//! double.set_error(LoadError::generic());
//! assert!(sut.load().await.is_err());
//! assert_eq!(double.load_count(), 1);
//! # }
//! ```

mod injectable;
mod proxy;

pub use injectable::InjectableLoader;
pub use proxy::LoaderProxy;
