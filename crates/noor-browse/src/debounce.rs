//! Trailing-edge debouncer for filter input.
//!
//! Every pushed value restarts the delay; only the last value of a burst is
//! emitted once the input has been quiet for the whole delay. `cancel` drops
//! a pending value, and dropping the [`Debouncer`] stops the task without
//! emitting anything still pending.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

enum Signal<T> {
    Value(T),
    Cancel,
}

pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<Signal<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce task on the current tokio runtime. Settled values
    /// arrive on the returned receiver.
    pub fn spawn(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, inputs) = mpsc::unbounded_channel();
        let (out, settled) = mpsc::unbounded_channel();
        tokio::spawn(run(delay, inputs, out));
        (Self { tx }, settled)
    }

    /// Returns false once the task has stopped (its receiver was dropped).
    pub fn push(&self, value: T) -> bool {
        self.tx.send(Signal::Value(value)).is_ok()
    }

    pub fn cancel(&self) {
        let _ = self.tx.send(Signal::Cancel);
    }
}

async fn run<T>(
    delay: Duration,
    mut inputs: mpsc::UnboundedReceiver<Signal<T>>,
    out: mpsc::UnboundedSender<T>,
) {
    let mut pending: Option<T> = None;
    loop {
        tokio::select! {
            signal = inputs.recv() => match signal {
                Some(Signal::Value(value)) => pending = Some(value),
                Some(Signal::Cancel) => {
                    trace!("debounce cancelled");
                    pending = None;
                }
                None => break,
            },
            () = tokio::time::sleep(delay), if pending.is_some() => {
                if let Some(value) = pending.take() {
                    if out.send(value).is_err() {
                        break;
                    }
                }
            }
        }
    }
}
