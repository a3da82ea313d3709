use std::sync::Arc;
use tokio::sync::watch;

use crate::loader::{CorpusLoader, LoadOutcome, LoadStatus};

/// Shared view of a corpus that is still being acquired.
///
/// Starts in [`LoadStatus::Loading`] and settles exactly once into `Ready` or
/// `Degraded`; there is no retry. Clones observe the same load.
#[derive(Clone)]
pub struct CorpusHandle {
    rx: watch::Receiver<Option<Arc<LoadOutcome>>>,
}

impl CorpusHandle {
    /// Run `loader` on the current tokio runtime.
    pub fn spawn(loader: CorpusLoader) -> Self {
        let (tx, rx) = watch::channel(None);
        tokio::spawn(async move {
            let outcome = loader.load().await;
            let _ = tx.send(Some(Arc::new(outcome)));
        });
        Self { rx }
    }

    pub fn status(&self) -> LoadStatus {
        self.rx
            .borrow()
            .as_ref()
            .map_or(LoadStatus::Loading, |o| o.status)
    }

    /// The settled outcome, or `None` while loading.
    pub fn outcome(&self) -> Option<Arc<LoadOutcome>> {
        self.rx.borrow().clone()
    }

    /// Wait until the load settles. `None` only if the load task died.
    pub async fn wait(&mut self) -> Option<Arc<LoadOutcome>> {
        let settled = self.rx.wait_for(Option::is_some).await.ok()?;
        settled.as_ref().map(Arc::clone)
    }
}
