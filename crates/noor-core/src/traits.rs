use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Query, Record, ScoredRecord};

/// Ranks a corpus against a query. Implementations are pure: the same query
/// over the same corpus always yields the same ordering.
pub trait Ranker: Send + Sync {
    fn rank<'a>(&self, query: &Query, corpus: &'a [Record]) -> Vec<ScoredRecord<'a>>;
}

/// A place a corpus document can be fetched from.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;

    /// Fetch and parse the document. An empty array is returned as `Ok(vec![])`;
    /// deciding whether that is acceptable is the loader's job.
    async fn fetch(&self) -> Result<Vec<Record>>;
}
