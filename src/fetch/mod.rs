//! Remote read of the record list.
//!
//! - `source.rs` - where records come from (`RecordSource`, `HttpSource`)
//! - `status.rs` - fetch lifecycle state and reducer
//! - `controller.rs` - spawns reads and resolves them against the status
//! - `error.rs` - failure taxonomy

mod controller;
mod error;
mod source;
mod status;

pub use controller::FetchController;
pub use error::FetchError;
pub use source::{HttpSource, RecordSource};
pub use status::{FetchIntent, FetchReducer, FetchStatus};
