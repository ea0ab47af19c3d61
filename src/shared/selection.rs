//! Single-slot mailbox for the record chosen in the list.
//!
//! Only one detail view is live at a time, so there is no queue or history:
//! each publish overwrites the previous selection.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use crate::model::Record;

/// The chosen record plus the payload it was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub record: Record,
    pub raw_payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The detail view was reached before anything was published.
    #[error("No record has been selected")]
    NoSelection,
}

/// Shared handle; every clone points at the same slot.
#[derive(Clone)]
pub struct SelectionChannel {
    tx: Arc<watch::Sender<Option<Selection>>>,
}

impl SelectionChannel {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Overwrite the current selection. Last writer wins.
    pub fn publish(&self, record: Record, raw_payload: serde_json::Value) {
        tracing::debug!(record_id = %record.id, "Selection published");
        self.tx.send_replace(Some(Selection {
            record,
            raw_payload,
        }));
    }

    pub fn read(&self) -> Result<Selection, SelectionError> {
        self.tx.borrow().clone().ok_or(SelectionError::NoSelection)
    }

    /// Empty the slot, returning what was there.
    pub fn clear(&self) -> Option<Selection> {
        self.tx.send_replace(None)
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_none()
    }

    /// Observe future publishes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Selection>> {
        self.tx.subscribe()
    }
}

impl Default for SelectionChannel {
    fn default() -> Self {
        Self::new()
    }
}
