use tracing::debug;

use noor_core::config::MatcherSettings;
use noor_core::traits::Ranker;
use noor_core::{Query, Record, ScoredRecord};

use crate::similarity::score_record;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Maximum number of results.
    pub top_k: usize,
    /// Results must score strictly above this.
    pub threshold: f32,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            threshold: 0.0,
        }
    }
}

impl From<&MatcherSettings> for MatchOptions {
    fn from(s: &MatcherSettings) -> Self {
        Self {
            top_k: s.top_k,
            threshold: s.threshold,
        }
    }
}

/// Token-overlap ranker behind the guidance search.
#[derive(Debug, Clone, Default)]
pub struct RelevanceMatcher {
    options: MatchOptions,
}

impl RelevanceMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Score every record, keep those above the threshold, order by score
    /// (ties keep corpus order) and cap at `top_k`.
    ///
    /// A blank query yields nothing; there is no "show everything" mode.
    pub fn match_records<'a>(&self, query: &Query, corpus: &'a [Record]) -> Vec<ScoredRecord<'a>> {
        if query.is_blank() {
            debug!("blank query, skipping match");
            return Vec::new();
        }
        let MatchOptions { top_k, threshold } = self.options;
        let mut scored: Vec<ScoredRecord<'a>> = corpus
            .iter()
            .map(|record| ScoredRecord {
                record,
                score: score_record(query.tokens(), record),
            })
            .filter(|s| s.score > threshold)
            .collect();
        // `sort_by` is stable, which is what keeps equal scores in corpus order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);
        debug!(
            query = query.raw(),
            candidates = corpus.len(),
            hits = scored.len(),
            "matched query"
        );
        scored
    }
}

impl Ranker for RelevanceMatcher {
    fn rank<'a>(&self, query: &Query, corpus: &'a [Record]) -> Vec<ScoredRecord<'a>> {
        self.match_records(query, corpus)
    }
}

/// Match with the default options (top 3, threshold 0).
pub fn match_query<'a>(query: &str, corpus: &'a [Record]) -> Vec<ScoredRecord<'a>> {
    RelevanceMatcher::default().match_records(&Query::new(query), corpus)
}

/// What the guidance view shows. "No match" is a different state from
/// "nothing searched yet".
#[derive(Debug, Clone, Default)]
pub enum MatchOutcome<'a> {
    #[default]
    NotSearched,
    NoMatch,
    Found(Vec<ScoredRecord<'a>>),
}

impl<'a> MatchOutcome<'a> {
    pub fn search(ranker: &dyn Ranker, query: &Query, corpus: &'a [Record]) -> Self {
        let results = ranker.rank(query, corpus);
        if results.is_empty() {
            Self::NoMatch
        } else {
            Self::Found(results)
        }
    }

    pub fn was_searched(&self) -> bool {
        !matches!(self, Self::NotSearched)
    }

    pub fn results(&self) -> &[ScoredRecord<'a>] {
        match self {
            Self::Found(results) => results,
            Self::NotSearched | Self::NoMatch => &[],
        }
    }
}
