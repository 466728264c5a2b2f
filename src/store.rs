//! Authoritative current-page state for one client.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::paging::{parse_saturating, PageIndex};
use crate::storage::{KeyValueStore, CURRENT_PAGE_KEY};

/// Whether the persisted page index has been resolved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Persisted state not read; page-dependent content must not render.
    Loading,
    /// Current page is known.
    Ready(PageIndex),
}

/// A page fetch issued by a page-index change.
///
/// `sequence` grows by one for every change, so a response can be matched
/// against the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: PageIndex,
    pub sequence: u64,
}

/// Holds the current page index and keeps it in sync with persistent storage.
pub struct PageIndexStore {
    storage: Arc<dyn KeyValueStore>,
    lifecycle: Lifecycle,
    sequence: u64,
}

impl PageIndexStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            lifecycle: Lifecycle::Loading,
            sequence: 0,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Returns the current page, or `None` while loading.
    pub fn current(&self) -> Option<PageIndex> {
        match self.lifecycle {
            Lifecycle::Loading => None,
            Lifecycle::Ready(page) => Some(page),
        }
    }

    /// Sequence number of the latest issued request.
    pub fn latest_sequence(&self) -> u64 {
        self.sequence
    }

    /// Resolves the starting page from storage.
    ///
    /// A missing or non-integer stored value starts at page 1.
    pub async fn initialize(&mut self) -> PageRequest {
        let stored = match self.storage.get(CURRENT_PAGE_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read persisted page: {}", e);
                None
            }
        };

        let requested = stored.as_deref().and_then(parse_saturating).unwrap_or(1);
        debug!(stored = ?stored, requested, "Initializing page index");

        self.set_page_index(requested).await
    }

    /// Clamps `requested` into range, persists it, and makes it current.
    ///
    /// Out-of-range input is corrected silently. The storage write is issued
    /// before the in-memory index changes, and both use the clamped value.
    pub async fn set_page_index(&mut self, requested: i64) -> PageRequest {
        let page = PageIndex::clamped(requested);

        if let Err(e) = self
            .storage
            .set(CURRENT_PAGE_KEY, &page.get().to_string())
            .await
        {
            warn!("Failed to persist page {}: {}", page, e);
        }

        self.lifecycle = Lifecycle::Ready(page);
        self.sequence += 1;
        PageRequest {
            page,
            sequence: self.sequence,
        }
    }

    /// Moves one page back. At page 1 this leaves the index unchanged.
    ///
    /// Does nothing and returns `None` while loading.
    pub async fn previous_page(&mut self) -> Option<PageRequest> {
        let current = self.current()?.get() as i64;
        Some(self.set_page_index(current - 1).await)
    }

    /// Moves one page forward. At the last page this leaves the index unchanged.
    ///
    /// Does nothing and returns `None` while loading.
    pub async fn next_page(&mut self) -> Option<PageRequest> {
        let current = self.current()?.get() as i64;
        Some(self.set_page_index(current + 1).await)
    }

    /// Whether the "previous" trigger should be enabled.
    pub fn can_go_previous(&self) -> bool {
        self.current().is_some_and(|page| !page.is_first())
    }

    /// Whether the "next" trigger should be enabled.
    pub fn can_go_next(&self) -> bool {
        self.current().is_some_and(|page| !page.is_last())
    }
}
