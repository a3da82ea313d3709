//! Latest-query-wins bookkeeping for callers that compute views off the
//! input thread. Each query takes a ticket; a result is only published if
//! its ticket is still the newest one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct LatestQuery {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct QueryTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl LatestQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query, superseding every ticket issued before.
    pub fn begin(&self) -> QueryTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        QueryTicket {
            generation,
            latest: Arc::clone(&self.generation),
        }
    }
}

impl QueryTicket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.generation
    }

    /// `Some(value)` if this ticket is still current; superseded results are dropped.
    pub fn publish<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}
