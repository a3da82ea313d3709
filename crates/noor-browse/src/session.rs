use std::num::NonZeroUsize;

use tracing::debug;

use noor_core::config::BrowseSettings;
use noor_core::{PageView, Record};

use crate::filter::filter;
use crate::paginate::{clamp_page, paginate};

/// Filter text and page position for one collection view.
///
/// The requested page is kept as asked for and clamped when a view is built,
/// so it can never point outside the filtered result. Any change to the
/// filter text sends the session back to page 1.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    filter: String,
    page: i64,
    page_size: NonZeroUsize,
}

impl BrowseSession {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            filter: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn from_settings(settings: &BrowseSettings) -> Self {
        Self::new(settings.page_size())
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn requested_page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns true when the filter actually changed (and the page was reset).
    pub fn set_filter(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.filter {
            return false;
        }
        debug!(filter = %text, "filter changed, resetting to page 1");
        self.filter = text;
        self.page = 1;
        true
    }

    pub fn go_to(&mut self, page: i64) {
        self.page = page;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        let current = clamp_page(self.page, total_pages);
        self.page = clamp_page(current as i64 + 1, total_pages) as i64;
    }

    pub fn previous_page(&mut self, total_pages: usize) {
        let current = clamp_page(self.page, total_pages);
        self.page = clamp_page(current as i64 - 1, total_pages) as i64;
    }

    /// Filter `corpus` with the current text and slice out the current page.
    pub fn view<'a>(&self, corpus: &'a [Record]) -> PageView<&'a Record> {
        paginate(&filter(corpus, &self.filter), self.page_size, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_filter_resets_page() {
        let mut s = BrowseSession::new(NonZeroUsize::new(20).unwrap());
        s.go_to(4);
        assert!(!s.set_filter(""), "same text is not a change");
        assert_eq!(s.requested_page(), 4);
        assert!(s.set_filter("anger"));
        assert_eq!(s.requested_page(), 1);
    }

    #[test]
    fn next_and_previous_stay_in_range() {
        let mut s = BrowseSession::new(NonZeroUsize::new(20).unwrap());
        s.go_to(9);
        s.previous_page(2);
        assert_eq!(s.requested_page(), 1, "stale page 9 is treated as page 2 first");
        s.previous_page(2);
        assert_eq!(s.requested_page(), 1);
        s.next_page(2);
        s.next_page(2);
        assert_eq!(s.requested_page(), 2);
    }
}
