//! Incremental page loading

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use character_catalog_provider::{CatalogError, CharacterSource};

use crate::collection::CharacterCollection;
use crate::liveness::LivenessToken;
use crate::pagination::{PageProgress, PaginationCursor};
use crate::types::Character;

/// Result of one [`PageLoader::load_more`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing was requested: a fetch is already running or the listing ended.
    Skipped,
    /// A non-empty page arrived.
    Loaded {
        page: u32,
        characters: Vec<Character>,
    },
    /// The listing has no more pages.
    Exhausted { page: u32 },
    /// The fetch failed; the same page will be requested next time.
    Failed { page: u32, error: CatalogError },
}

impl LoadOutcome {
    /// Merge a loaded page into `collection` if `liveness` still holds.
    ///
    /// Returns whether the collection changed.
    pub fn publish_into(
        self,
        collection: &mut CharacterCollection,
        liveness: &LivenessToken,
    ) -> bool {
        if !liveness.is_alive() {
            log::debug!("Discarding page completion for a torn-down view");
            return false;
        }
        match self {
            Self::Loaded { characters, .. } => {
                collection.merge_page(characters);
                true
            }
            _ => false,
        }
    }
}

/// Fetches pages one at a time from a [`CharacterSource`].
pub struct PageLoader {
    source: Arc<dyn CharacterSource>,
    cursor: Mutex<PaginationCursor>,
}

impl PageLoader {
    /// Create a loader positioned at page 1.
    #[must_use]
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self {
            source,
            cursor: Mutex::new(PaginationCursor::new()),
        }
    }

    /// Copy of the current cursor.
    pub fn cursor(&self) -> PaginationCursor {
        *lock(&self.cursor)
    }

    /// Fetch the next page.
    ///
    /// Returns [`LoadOutcome::Skipped`] without touching the network while
    /// another call is outstanding or after the listing ended. The in-flight
    /// claim is released on every exit path, including when the returned
    /// future is dropped mid-fetch.
    pub async fn load_more(&self) -> LoadOutcome {
        let Some(page) = lock(&self.cursor).try_begin() else {
            return LoadOutcome::Skipped;
        };
        let mut claim = InFlightClaim::new(&self.cursor);
        let source = self.source.id();

        match self.source.fetch_page(page).await {
            Ok(response) if response.is_empty() => {
                log::info!("[{source}] Page {page} is empty, listing exhausted");
                claim.finish(PageProgress::Exhausted);
                LoadOutcome::Exhausted { page }
            }
            Ok(response) => {
                log::debug!("[{source}] Page {page}: {} records", response.results.len());
                claim.finish(PageProgress::Advanced);
                LoadOutcome::Loaded {
                    page,
                    characters: response.results,
                }
            }
            // A missing first page points at a bad endpoint, not an empty catalog.
            Err(CatalogError::PageNotFound { .. }) if page > 1 => {
                log::info!("[{source}] Page {page} not found, listing exhausted");
                claim.finish(PageProgress::Exhausted);
                LoadOutcome::Exhausted { page }
            }
            Err(error) => {
                if error.is_expected() {
                    log::warn!("[{source}] Failed to load page {page}: {error}");
                } else {
                    log::error!("[{source}] Failed to load page {page}: {error}");
                }
                claim.finish(PageProgress::Unchanged);
                LoadOutcome::Failed { page, error }
            }
        }
    }
}

/// Holds the cursor's in-flight flag; releases it on drop if not finished.
struct InFlightClaim<'a> {
    cursor: &'a Mutex<PaginationCursor>,
    finished: bool,
}

impl<'a> InFlightClaim<'a> {
    fn new(cursor: &'a Mutex<PaginationCursor>) -> Self {
        Self {
            cursor,
            finished: false,
        }
    }

    fn finish(&mut self, progress: PageProgress) {
        lock(self.cursor).finish(progress);
        self.finished = true;
    }
}

impl Drop for InFlightClaim<'_> {
    fn drop(&mut self) {
        if !self.finished {
            lock(self.cursor).finish(PageProgress::Unchanged);
        }
    }
}

fn lock(cursor: &Mutex<PaginationCursor>) -> MutexGuard<'_, PaginationCursor> {
    cursor.lock().unwrap_or_else(PoisonError::into_inner)
}
