use noor_core::text::{self, TokenSet};
use noor_core::Record;

/// One text a query is compared against. A record's targets are its text
/// bundle followed by each of its tags, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringTarget<'a> {
    /// Every non-empty text field, English then Urdu then Arabic, joined by spaces.
    TextBundle(String),
    Tag(&'a str),
}

impl ScoringTarget<'_> {
    pub fn text(&self) -> &str {
        match self {
            ScoringTarget::TextBundle(bundle) => bundle,
            ScoringTarget::Tag(tag) => tag,
        }
    }
}

pub fn scoring_targets(record: &Record) -> Vec<ScoringTarget<'_>> {
    let mut targets = Vec::with_capacity(1 + record.tags().len());
    targets.push(ScoringTarget::TextBundle(record.fields().bundle()));
    targets.extend(
        record
            .tags()
            .iter()
            .map(|tag| ScoringTarget::Tag(tag.as_str())),
    );
    targets
}

/// `|A ∩ B| / max(1, min(|A|, |B|))`.
///
/// Normalizing by the smaller set keeps a short query from being penalized
/// for matching a long field. The result is in `[0, 1]`.
pub fn overlap(a: &TokenSet, b: &TokenSet) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared = small.iter().filter(|t| large.contains(*t)).count();
    shared as f32 / small.len().max(1) as f32
}

/// Best overlap between `query` and any of the record's scoring targets.
pub fn score_record(query: &TokenSet, record: &Record) -> f32 {
    scoring_targets(record)
        .iter()
        .map(|target| overlap(query, &text::tokenize(target.text())))
        .fold(0.0, f32::max)
}
