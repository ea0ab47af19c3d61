//! Owner of the in-flight read.
//!
//! Each activation spawns one task and bumps a generation number. A newer
//! activation aborts the older task, and any outcome that still slips through
//! carries the old generation and is dropped. A slow response can never
//! overwrite data from a later activation.
//!
//! The read itself runs in an inner task so a panicking source still
//! resolves the activation, as a network failure.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::fetch::error::FetchError;
use crate::fetch::source::RecordSource;
use crate::fetch::status::{FetchIntent, FetchReducer, FetchStatus};
use crate::model::Dataset;
use crate::mvi::dispatch;

/// Result of one read, tagged with the activation that issued it.
#[derive(Debug)]
struct FetchOutcome {
    generation: u64,
    result: Result<Dataset, FetchError>,
}

pub struct FetchController {
    source: Arc<dyn RecordSource>,
    status: FetchStatus,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl FetchController {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            source,
            status: FetchStatus::Idle,
            generation: 0,
            in_flight: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Number of activations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue one read, cancelling any read still in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self) {
        if self.abort_in_flight() {
            tracing::debug!(
                generation = self.generation,
                "Superseding in-flight fetch"
            );
        }

        self.generation += 1;
        dispatch::<FetchReducer>(&mut self.status, FetchIntent::Activate);

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();

        tracing::info!(source = %source.name(), generation, "Fetch started");

        self.in_flight = Some(tokio::spawn(async move {
            let mut read = AbortOnDrop(tokio::spawn(async move { source.fetch().await }));
            let result = match (&mut read.0).await {
                Ok(result) => result,
                Err(join_error) => Err(FetchError::Network {
                    reason: if join_error.is_panic() {
                        "fetch task panicked".to_string()
                    } else {
                        "fetch task cancelled".to_string()
                    },
                }),
            };
            // Receiver lives as long as the controller; a send error only
            // means the controller is gone.
            let _ = tx.send(FetchOutcome { generation, result });
        }));
    }

    /// Wait for the current activation to resolve.
    ///
    /// Returns `None` right away when nothing is pending.
    pub async fn next_outcome(&mut self) -> Option<Result<Dataset, FetchError>> {
        while self.status.is_pending() {
            let outcome = self.outcome_rx.recv().await?;
            if let Some(result) = self.resolve(outcome) {
                return Some(result);
            }
        }
        None
    }

    /// Non-blocking variant of [`next_outcome`](Self::next_outcome).
    pub fn try_next_outcome(&mut self) -> Option<Result<Dataset, FetchError>> {
        while self.status.is_pending() {
            let outcome = self.outcome_rx.try_recv().ok()?;
            if let Some(result) = self.resolve(outcome) {
                return Some(result);
            }
        }
        None
    }

    fn resolve(&mut self, outcome: FetchOutcome) -> Option<Result<Dataset, FetchError>> {
        if outcome.generation != self.generation {
            tracing::debug!(
                stale = outcome.generation,
                current = self.generation,
                "Discarding stale fetch outcome"
            );
            return None;
        }

        self.in_flight = None;
        match &outcome.result {
            Ok(dataset) => {
                tracing::info!(
                    generation = self.generation,
                    records = dataset.len(),
                    "Fetch succeeded"
                );
                dispatch::<FetchReducer>(&mut self.status, FetchIntent::Succeeded);
            }
            Err(error) => {
                tracing::warn!(
                    generation = self.generation,
                    error_type = error.error_type(),
                    error = %error,
                    "Fetch failed"
                );
                dispatch::<FetchReducer>(
                    &mut self.status,
                    FetchIntent::Failed {
                        error: error.clone(),
                    },
                );
            }
        }
        Some(outcome.result)
    }

    /// Returns true if a task was still running.
    fn abort_in_flight(&mut self) -> bool {
        match self.in_flight.take() {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }
}

/// Aborts the inner read when the outer task is aborted.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        if self.abort_in_flight() {
            tracing::debug!(generation = self.generation, "Fetch cancelled on teardown");
        }
    }
}
