use std::num::NonZeroUsize;

use noor_core::PageView;

/// `max(1, ceil(total / page_size))`. An empty sequence still has one (empty) page.
pub fn page_count(total: usize, page_size: NonZeroUsize) -> usize {
    total.div_ceil(page_size.get()).max(1)
}

/// Clamp a requested 1-based page into `1..=total_pages`. Zero, negative and
/// oversized requests are clamped, never rejected.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    // Clamped into 1..=last, so the cast back cannot truncate.
    requested.clamp(1, last) as usize
}

/// Slice out page `requested_page` of `items`.
pub fn paginate<T: Clone>(
    items: &[T],
    page_size: NonZeroUsize,
    requested_page: i64,
) -> PageView<T> {
    let total_pages = page_count(items.len(), page_size);
    let page_index = clamp_page(requested_page, total_pages);
    let start = (page_index - 1) * page_size.get();
    let end = (start + page_size.get()).min(items.len());
    PageView {
        items: items
            .get(start..end)
            .map(<[T]>::to_vec)
            .unwrap_or_default(),
        page_index,
        total_pages,
        total_filtered: items.len(),
    }
}
