//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of state that changes in response to an event goes through
//! a reducer, so the set of legal transitions lives in one `match`.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot a presenter can render
//! - **Intent**: user action or system event (fetch resolved, tap, keystroke)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::State;
