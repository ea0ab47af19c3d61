//! In-process `RecordSource` that replays queued outcomes.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use phonelist::fetch::{FetchError, RecordSource};
use phonelist::model::Dataset;

/// What the next `fetch` call does.
#[derive(Debug, Clone)]
pub enum Step {
    Ready(Result<Dataset, FetchError>),
    Delayed(Duration, Result<Dataset, FetchError>),
    /// Never resolves; only ends by cancellation.
    Hang,
    /// Panics inside the read.
    Panic,
}

pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    cancelled: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            cancelled: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn ok(dataset: Dataset) -> Arc<Self> {
        Self::new(vec![Step::Ready(Ok(dataset))])
    }

    pub fn push(&self, step: Step) {
        self.steps.lock().push_back(step);
    }

    /// Number of reads started.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of reads dropped before they resolved.
    pub fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Counts a cancellation if dropped while still armed.
struct CancelGuard {
    counter: Arc<AtomicUsize>,
    armed: bool,
}

impl CancelGuard {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if self.armed {
            self.counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Dataset, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().pop_front().unwrap_or(Step::Hang);
        let guard = CancelGuard {
            counter: Arc::clone(&self.cancelled),
            armed: true,
        };

        let result = match step {
            Step::Ready(result) => result,
            Step::Delayed(delay, result) => {
                tokio::time::sleep(delay).await;
                result
            }
            Step::Hang => std::future::pending::<Result<Dataset, FetchError>>().await,
            Step::Panic => panic!("scripted source panicked"),
        };

        guard.disarm();
        result
    }
}
