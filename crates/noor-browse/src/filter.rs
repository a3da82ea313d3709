use noor_core::text;
use noor_core::Record;

/// Substring match of `query` against a record.
///
/// Translations, the display reference (the explicit `ref`, or
/// `"<collection> <number>"` without one) and the stringified number are
/// compared case-insensitively; the primary-script field is compared verbatim.
/// An empty query matches every record.
pub fn record_matches(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_folded(record, query, &text::fold(query))
}

/// Records matching `query`, in corpus order. An empty query is the identity filter.
pub fn filter<'a>(corpus: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return corpus.iter().collect();
    }
    let needle = text::fold(query);
    corpus
        .iter()
        .filter(|r| matches_folded(r, query, &needle))
        .collect()
}

fn matches_folded(record: &Record, raw: &str, needle: &str) -> bool {
    let in_fields = record.fields().iter().any(|(script, value)| {
        if script.is_primary() {
            value.contains(raw)
        } else {
            text::contains_folded(value, needle)
        }
    });
    in_fields
        || record.number().to_string().contains(needle)
        || text::contains_folded(&record.display_reference(), needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noor_core::TextFields;

    fn corpus() -> Vec<Record> {
        let intentions = TextFields::new(
            "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ",
            "اعمال کا دار و مدار نیتوں پر ہے۔",
            "Actions are but by intentions.",
        );
        let pillars = TextFields::new(
            "الإِسْلاَمُ بُنِيَ عَلَى خَمْسٍ",
            "اسلام پانچ چیزوں پر قائم ہے۔",
            "Islam is built upon five (pillars).",
        );
        let anger = TextFields::new("لاَ تَغْضَبْ", "غصہ نہ کرو۔", "Do not become angry.");
        vec![
            Record::new("b-1", "sahih-bukhari", 1, intentions)
                .unwrap()
                .with_reference("Bukhari 1: Intentions"),
            Record::new("b-2", "sahih-bukhari", 2, pillars)
                .unwrap()
                .with_reference("Bukhari 2: Islam, Iman, Ihsan"),
            Record::new("m-2622", "sahih-muslim", 2622, anger).unwrap(),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let corpus = corpus();
        assert_eq!(filter(&corpus, "").len(), corpus.len());
    }

    #[test]
    fn english_match_ignores_case() {
        let corpus = corpus();
        assert_eq!(ids(&filter(&corpus, "ISLAM")), ["b-2"]);
    }

    #[test]
    fn number_and_reference_match() {
        let corpus = corpus();
        assert_eq!(ids(&filter(&corpus, "262")), ["m-2622"]);
        assert_eq!(ids(&filter(&corpus, "ihsan")), ["b-2"]);
        // "2" hits the number of b-2 and is a substring of 2622.
        assert_eq!(ids(&filter(&corpus, "2")), ["b-2", "m-2622"]);
    }

    #[test]
    fn display_reference_fallback_is_searched() {
        let corpus = corpus();
        assert_eq!(ids(&filter(&corpus, "Sahih-Muslim")), ["m-2622"]);
        assert_eq!(ids(&filter(&corpus, "sahih-muslim 2622")), ["m-2622"]);
        assert!(
            filter(&corpus, "sahih-bukhari").is_empty(),
            "an explicit ref replaces the fallback"
        );
    }

    #[test]
    fn arabic_and_urdu_substrings() {
        let corpus = corpus();
        assert_eq!(ids(&filter(&corpus, "تَغْضَبْ")), ["m-2622"]);
        assert_eq!(ids(&filter(&corpus, "پانچ")), ["b-2"]);
    }

    #[test]
    fn arabic_is_matched_verbatim() {
        let corpus = corpus();
        assert!(filter(&corpus, "تغضب").is_empty(), "unvoweled text does not match voweled");
    }

    #[test]
    fn record_matches_agrees_with_filter() {
        let corpus = corpus();
        for q in ["", "angry", "bukhari", "xyz"] {
            let expected = filter(&corpus, q).len();
            let matched = corpus.iter().filter(|r| record_matches(r, q)).count();
            assert_eq!(matched, expected, "query {q:?}");
        }
    }
}
