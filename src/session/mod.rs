//! One activation of the list screen.
//!
//! A [`ListSession`] owns the fetch controller and the filter state. It
//! consumes UI events and projects a [`ListView`] for the presenter.
//! Dropping the session cancels any read still in flight.

mod refresh;
mod view;

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::fetch::{FetchController, FetchError, FetchStatus, RecordSource};
use crate::filter::FilterState;
use crate::model::{Dataset, RecordId};
use crate::shared::{AppContext, CounterAction};

pub use view::{ListView, ERROR_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The tapped record is not in the displayed list.
    #[error("Record '{id}' is not displayed")]
    UnknownRecord { id: RecordId },
}

pub struct ListSession {
    id: Uuid,
    fetch: FetchController,
    filter: FilterState,
    ctx: AppContext,
}

impl ListSession {
    pub fn new(source: Arc<dyn RecordSource>, ctx: AppContext) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, source = %source.name(), "Session created");
        Self {
            id,
            fetch: FetchController::new(source),
            filter: FilterState::default(),
            ctx,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> &FetchStatus {
        self.fetch.status()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Screen mounted: issue the initial read.
    ///
    /// The current dataset stays searchable until the read resolves.
    pub fn on_activate(&mut self) {
        tracing::info!(session_id = %self.id, "Session activated");
        self.fetch.activate();
    }

    /// Pull-to-refresh gesture.
    pub fn on_refresh(&mut self) {
        self.refresh();
    }

    pub fn on_query_change(&mut self, text: &str) {
        self.filter.set_query(text);
        tracing::trace!(
            session_id = %self.id,
            results = self.filter.result_count(),
            "Query changed"
        );
    }

    pub fn on_query_clear(&mut self) {
        self.filter.clear_query();
    }

    /// Publish the displayed record with `id` to the selection channel.
    pub fn on_item_select(&mut self, id: &RecordId) -> Result<(), SessionError> {
        let record = self
            .filter
            .displayed()
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownRecord { id: id.clone() })?;

        let raw_payload = record.raw_payload();
        self.ctx.selection.publish(record, raw_payload);
        Ok(())
    }

    pub fn on_counter_increment(&self) {
        self.ctx.counter.dispatch(CounterAction::Increment);
    }

    pub fn on_counter_decrement(&self) {
        self.ctx.counter.dispatch(CounterAction::Decrement);
    }

    /// Wait for the in-flight read and apply it.
    ///
    /// Returns the number of records seeded, the fetch error, or `None`
    /// if nothing was pending.
    pub async fn next_update(&mut self) -> Option<Result<usize, FetchError>> {
        let result = self.fetch.next_outcome().await?;
        Some(self.apply(result))
    }

    /// Apply an outcome that has already arrived, without waiting.
    pub fn poll_updates(&mut self) -> Option<Result<usize, FetchError>> {
        let result = self.fetch.try_next_outcome()?;
        Some(self.apply(result))
    }

    fn apply(&mut self, result: Result<Dataset, FetchError>) -> Result<usize, FetchError> {
        match result {
            Ok(dataset) => {
                let count = dataset.len();
                self.filter.seed(dataset);
                Ok(count)
            }
            Err(error) => {
                self.filter.reset();
                Err(error)
            }
        }
    }

    /// Project the current state for the presenter.
    pub fn view(&self) -> ListView {
        ListView::project(self.fetch.status(), &self.filter, self.ctx.counter.value())
    }
}

impl Drop for ListSession {
    fn drop(&mut self) {
        tracing::debug!(session_id = %self.id, "Session torn down");
    }
}
