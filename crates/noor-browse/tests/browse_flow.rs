use std::num::NonZeroUsize;

use proptest::prelude::*;

use noor_browse::{clamp_page, filter, paginate, BrowseSession};
use noor_corpus::samples::fallback_sample;

fn twenty() -> NonZeroUsize {
    NonZeroUsize::new(20).unwrap()
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let corpus = fallback_sample();
    let view = paginate(&corpus, twenty(), 5);
    assert_eq!(view.page_index, 2);
    assert_eq!(view.total_pages, 2);
    assert_eq!(view.total_filtered, 40);
    assert_eq!(view.items.first().map(|r| r.number()), Some(21));
    assert_eq!(view.items.last().map(|r| r.number()), Some(40));
    assert!(view.has_previous() && !view.has_next());
}

#[test]
fn empty_filter_is_identity() {
    let corpus = fallback_sample();
    let all = filter(&corpus, "");
    assert_eq!(all.len(), corpus.len());
    assert!(all.iter().zip(&corpus).all(|(a, b)| a.id() == b.id()));
}

#[test]
fn reference_filter_narrows_to_one_page() {
    let corpus = fallback_sample();
    let mut session = BrowseSession::new(twenty());
    session.go_to(2);
    assert!(session.set_filter("bukhari 3"));
    assert_eq!(session.requested_page(), 1);

    let view = session.view(&corpus);
    // Bukhari 3 and Bukhari 30..=39.
    assert_eq!(view.total_filtered, 11);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.items[0].number(), 3);
}

#[test]
fn no_match_still_reports_one_page() {
    let corpus = fallback_sample();
    let mut session = BrowseSession::new(twenty());
    session.set_filter("zzzz");
    let view = session.view(&corpus);
    assert!(view.items.is_empty());
    assert_eq!(view.page_index, 1);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn paging_walks_and_stops_at_the_ends() {
    let corpus = fallback_sample();
    let mut session = BrowseSession::new(NonZeroUsize::new(15).unwrap());
    let total = session.view(&corpus).total_pages;
    assert_eq!(total, 3);
    for _ in 0..5 {
        session.next_page(total);
    }
    assert_eq!(session.view(&corpus).page_index, 3);
    assert_eq!(session.view(&corpus).items.len(), 10);
    for _ in 0..5 {
        session.previous_page(total);
    }
    assert_eq!(session.view(&corpus).page_index, 1);
}

proptest! {
    #[test]
    fn clamped_page_is_always_in_range(requested in any::<i64>(), total in 1usize..500) {
        let page = clamp_page(requested, total);
        prop_assert!((1..=total).contains(&page));
    }

    #[test]
    fn view_never_exceeds_page_size(requested in any::<i64>(), size in 1usize..60) {
        let corpus = fallback_sample();
        let size = NonZeroUsize::new(size).unwrap();
        let view = paginate(&corpus, size, requested);
        prop_assert!(view.items.len() <= size.get());
        prop_assert!(view.page_index >= 1 && view.page_index <= view.total_pages);
        prop_assert!(!view.items.is_empty());
    }
}
