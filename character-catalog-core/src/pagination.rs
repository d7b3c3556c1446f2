//! Pagination cursor
//!
//! Tracks which page to request next, whether more pages exist, and whether a
//! request is outstanding. At most one request may be in flight.

use serde::Serialize;

/// How a finished fetch moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageProgress {
    /// A non-empty page arrived: advance to the next page.
    Advanced,
    /// The listing ended: stop requesting pages for good.
    Exhausted,
    /// The fetch failed: retry the same page next time.
    Unchanged,
}

/// Pagination cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationCursor {
    page: u32,
    has_more: bool,
    in_flight: bool,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationCursor {
    pub fn new() -> Self {
        Self {
            page: 1,
            has_more: true,
            in_flight: false,
        }
    }

    /// Page the next fetch will request.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// `false` once an empty page has been observed. Never becomes `true` again.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Claim the next page, or `None` if a fetch is in flight or the listing ended.
    pub fn try_begin(&mut self) -> Option<u32> {
        if self.in_flight || !self.has_more {
            return None;
        }
        self.in_flight = true;
        Some(self.page)
    }

    /// Release the in-flight claim and record the outcome.
    pub fn finish(&mut self, progress: PageProgress) {
        self.in_flight = false;
        match progress {
            PageProgress::Advanced => self.page = self.page.saturating_add(1),
            PageProgress::Exhausted => self.has_more = false,
            PageProgress::Unchanged => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_page_one() {
        let cursor = PaginationCursor::new();
        assert_eq!(cursor.page(), 1);
        assert!(cursor.has_more());
        assert!(!cursor.is_in_flight());
    }

    #[test]
    fn second_begin_is_refused_while_in_flight() {
        let mut cursor = PaginationCursor::new();
        assert_eq!(cursor.try_begin(), Some(1));
        assert_eq!(cursor.try_begin(), None);
        cursor.finish(PageProgress::Advanced);
        assert_eq!(cursor.try_begin(), Some(2));
    }

    #[test]
    fn failure_retries_same_page() {
        let mut cursor = PaginationCursor::new();
        cursor.try_begin();
        cursor.finish(PageProgress::Unchanged);
        assert!(!cursor.is_in_flight());
        assert_eq!(cursor.try_begin(), Some(1));
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut cursor = PaginationCursor::new();
        cursor.try_begin();
        cursor.finish(PageProgress::Exhausted);
        assert!(!cursor.has_more());
        assert_eq!(cursor.try_begin(), None);

        // Nothing may revive it
        cursor.finish(PageProgress::Advanced);
        cursor.finish(PageProgress::Unchanged);
        assert!(!cursor.has_more());
        assert_eq!(cursor.try_begin(), None);
    }
}
