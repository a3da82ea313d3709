//! Prioritized corpus acquisition.
//!
//! The loader starts in `loading`, tries its sources in priority order and
//! ends in `ready` (a source produced at least one record) or `degraded`
//! (every source failed, the built-in fallback is used and a warning is
//! attached). Nothing in here returns an error to the caller.

use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use noor_core::config::{CorpusSettings, SourceStrategy};
use noor_core::traits::CorpusSource;
use noor_core::{Error, Record, Result};

use crate::samples::fallback_sample;
use crate::source::source_for;

pub const DEGRADED_WARNING: &str = "Unable to load full dataset. Showing a small sample.";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Loading,
    Ready,
    Degraded,
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub status: LoadStatus,
    pub records: Vec<Record>,
    /// Location of the winning source; `None` when degraded.
    pub source: Option<String>,
    pub warning: Option<String>,
    /// Failures of sources tried before the winner (all of them when degraded).
    pub failures: Vec<Error>,
}

struct Attempt {
    winner: Option<(String, Vec<Record>)>,
    failures: Vec<Error>,
}

pub struct CorpusLoader {
    sources: Vec<Box<dyn CorpusSource>>,
    fallback: Vec<Record>,
    timeout: Duration,
    strategy: SourceStrategy,
}

impl CorpusLoader {
    /// `fallback` is what a degraded load returns. An empty list is replaced
    /// by the built-in sample, so a degraded outcome always carries records.
    pub fn new(fallback: Vec<Record>) -> Self {
        Self {
            sources: Vec::new(),
            fallback,
            timeout: DEFAULT_TIMEOUT,
            strategy: SourceStrategy::Sequential,
        }
    }

    /// Sources from configuration; relative file paths resolve against `base`.
    pub fn from_settings(settings: &CorpusSettings, base: &Path, fallback: Vec<Record>) -> Self {
        let client = reqwest::Client::new();
        let sources = settings
            .sources
            .iter()
            .map(|location| source_for(location, base, &settings.collection, &client))
            .collect();
        Self {
            sources,
            fallback,
            timeout: settings.fetch_timeout(),
            strategy: settings.strategy,
        }
    }

    /// Append a source at the lowest priority so far.
    pub fn with_source(mut self, source: impl CorpusSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_strategy(mut self, strategy: SourceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub async fn load(&self) -> LoadOutcome {
        let attempt = match self.strategy {
            SourceStrategy::Sequential => self.try_sequential().await,
            SourceStrategy::Parallel => self.try_parallel().await,
        };
        match attempt.winner {
            Some((location, records)) => {
                info!(%location, records = records.len(), "corpus ready");
                LoadOutcome {
                    status: LoadStatus::Ready,
                    records,
                    source: Some(location),
                    warning: None,
                    failures: attempt.failures,
                }
            }
            None => {
                let exhausted = Error::CorpusExhausted {
                    attempted: self.sources.len(),
                };
                warn!(
                    error = %exhausted,
                    fallback = self.fallback.len(),
                    "using built-in sample corpus"
                );
                LoadOutcome {
                    status: LoadStatus::Degraded,
                    records: self.fallback_records(),
                    source: None,
                    warning: Some(DEGRADED_WARNING.to_string()),
                    failures: attempt.failures,
                }
            }
        }
    }

    fn fallback_records(&self) -> Vec<Record> {
        if self.fallback.is_empty() {
            warn!("no fallback records given, using the built-in sample");
            return fallback_sample();
        }
        self.fallback.clone()
    }

    /// One bounded fetch. Empty documents count as failures.
    async fn attempt(&self, source: &dyn CorpusSource) -> Result<Vec<Record>> {
        let location = source.location();
        debug!(%location, "trying corpus source");
        let result = match tokio::time::timeout(self.timeout, source.fetch()).await {
            Err(_) => Err(Error::unavailable(
                &location,
                format!("timed out after {:?}", self.timeout),
            )),
            Ok(Ok(records)) if records.is_empty() => {
                Err(Error::unavailable(&location, "document holds no records"))
            }
            Ok(result) => result,
        };
        if let Err(e) = &result {
            warn!(error = %e, "corpus source failed");
        }
        result
    }

    async fn try_sequential(&self) -> Attempt {
        let mut failures = Vec::new();
        for source in &self.sources {
            match self.attempt(source.as_ref()).await {
                Ok(records) => {
                    return Attempt {
                        winner: Some((source.location(), records)),
                        failures,
                    }
                }
                Err(e) => failures.push(e),
            }
        }
        Attempt {
            winner: None,
            failures,
        }
    }

    /// Try every source at once. A success is only taken once every
    /// higher-priority source has failed, so the result is the same as the
    /// sequential walk; remaining fetches are dropped as soon as it is known.
    async fn try_parallel(&self) -> Attempt {
        let mut slots: Vec<Option<Result<Vec<Record>>>> =
            self.sources.iter().map(|_| None).collect();
        let mut pending: FuturesUnordered<_> = self
            .sources
            .iter()
            .enumerate()
            .map(|(index, source)| async move { (index, self.attempt(source.as_ref()).await) })
            .collect();
        let mut next = 0;
        while let Some((index, result)) = pending.next().await {
            slots[index] = Some(result);
            while matches!(slots.get(next), Some(Some(Err(_)))) {
                next += 1;
            }
            if let Some(Some(Ok(records))) = slots.get_mut(next).map(Option::take) {
                let failures = slots[..next]
                    .iter_mut()
                    .filter_map(Option::take)
                    .filter_map(Result::err)
                    .collect();
                return Attempt {
                    winner: Some((self.sources[next].location(), records)),
                    failures,
                };
            }
        }
        let failures = slots
            .into_iter()
            .flatten()
            .filter_map(Result::err)
            .collect();
        Attempt {
            winner: None,
            failures,
        }
    }
}

/// Try `sources` in order, falling back to `fallback` (or the built-in
/// sample when `fallback` is empty).
pub async fn load_corpus(
    sources: Vec<Box<dyn CorpusSource>>,
    fallback: Vec<Record>,
) -> LoadOutcome {
    let mut loader = CorpusLoader::new(fallback);
    loader.sources = sources;
    loader.load().await
}
