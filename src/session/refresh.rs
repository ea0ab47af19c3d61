//! Manual refresh.

use super::ListSession;

impl ListSession {
    /// Drop the dataset and query, then issue a fresh read.
    ///
    /// Any read still in flight is cancelled; the status goes straight to
    /// `Pending`, clearing a previous failure. The record count stays 0
    /// until the new read resolves.
    pub fn refresh(&mut self) {
        tracing::info!(
            session_id = %self.id,
            previous = self.fetch.status().label(),
            "Refreshing list"
        );
        self.filter.reset();
        self.fetch.activate();
    }
}
