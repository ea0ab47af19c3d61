//! State shared across screens.
//!
//! Both stores are cloneable handles over a `watch` channel. The application
//! root creates one [`AppContext`] and passes clones to whatever needs them.

mod counter;
mod selection;

pub use counter::{CounterAction, CounterReducer, CounterState, CounterStore, Method};
pub use selection::{Selection, SelectionChannel, SelectionError};

/// Handles to the process-wide stores.
#[derive(Clone, Default)]
pub struct AppContext {
    pub selection: SelectionChannel,
    pub counter: CounterStore,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }
}
