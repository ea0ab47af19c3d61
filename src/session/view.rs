//! Read-only projection of a session for the presenter.

use crate::fetch::FetchStatus;
use crate::filter::FilterState;
use crate::model::Record;

/// Inline message shown under the search box when the read failed.
pub const ERROR_MESSAGE: &str = "Something went wrong.";

/// Everything the list screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub status: FetchStatus,
    pub displayed: Vec<Record>,
    /// Footer "Records: N".
    pub result_count: usize,
    pub query: String,
    pub error_message: Option<&'static str>,
    pub counter_value: i64,
    /// Spinner while a read is in flight.
    pub show_progress: bool,
    /// Cancel icon next to a non-empty search box.
    pub show_clear_button: bool,
}

impl ListView {
    pub fn project(status: &FetchStatus, filter: &FilterState, counter_value: i64) -> Self {
        Self {
            status: status.clone(),
            displayed: filter.displayed().to_vec(),
            result_count: filter.result_count(),
            query: filter.query().to_string(),
            error_message: status.is_failed().then_some(ERROR_MESSAGE),
            counter_value,
            show_progress: status.is_pending(),
            show_clear_button: !filter.query().is_empty(),
        }
    }
}
