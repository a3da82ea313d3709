use proptest::prelude::*;

use noor_core::{Query, Record, TextFields};
use noor_match::{MatchOptions, RelevanceMatcher};

const WORDS: &[&str] = &[
    "anger",
    "patience",
    "trade",
    "trust",
    "intention",
    "صبر",
    "غصہ",
    "sincerity",
];

fn word() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(WORDS)
}

fn record() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>)> {
    (proptest::collection::vec(word(), 1..5), proptest::collection::vec(word(), 0..3))
}

fn build(entries: &[(Vec<&'static str>, Vec<&'static str>)]) -> Vec<Record> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (text, tags))| {
            let fields = TextFields::new("", "", &text.join(" "));
            Record::new(format!("r-{i}"), "prop", i as u32, fields)
                .unwrap()
                .with_tags(tags.iter().copied())
        })
        .collect()
}

proptest! {
    #[test]
    fn results_are_capped_sorted_and_above_threshold(
        entries in proptest::collection::vec(record(), 0..12),
        query in proptest::collection::vec(word(), 1..4),
        top_k in 1usize..5,
        threshold in 0.0f32..0.9,
    ) {
        let corpus = build(&entries);
        let matcher = RelevanceMatcher::new(MatchOptions { top_k, threshold });
        let hits = matcher.match_records(&Query::new(query.join(" ")), &corpus);
        prop_assert!(hits.len() <= top_k);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for hit in &hits {
            prop_assert!(hit.score > threshold && hit.score <= 1.0);
        }
    }

    #[test]
    fn equal_scores_keep_corpus_order(
        entries in proptest::collection::vec(record(), 0..12),
        query in word(),
    ) {
        let corpus = build(&entries);
        let matcher = RelevanceMatcher::new(MatchOptions {
            top_k: usize::MAX,
            threshold: 0.0,
        });
        let hits = matcher.match_records(&Query::new(query), &corpus);
        for pair in hits.windows(2) {
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].record.number() < pair[1].record.number());
            }
        }
    }

    #[test]
    fn disjoint_query_matches_nothing(entries in proptest::collection::vec(record(), 0..12)) {
        let corpus = build(&entries);
        let hits = RelevanceMatcher::default().match_records(&Query::new("zakat hajj"), &corpus);
        prop_assert!(hits.is_empty());
    }
}
