//! The unit of loaded data.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// One item produced by a loader.
///
/// Items carry no data beyond their identity. Every call to [`FeedItem::new`]
/// yields a distinct item; clones compare equal to the item they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    id: u64,
}

impl FeedItem {
    /// Creates a fresh item with a process-unique identity.
    pub fn new() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the identity of this item.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Default for FeedItem {
    fn default() -> Self {
        Self::new()
    }
}
