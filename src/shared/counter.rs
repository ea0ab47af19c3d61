//! Process-wide counter shared between screens.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::mvi::{dispatch, Intent, Reducer, State};

/// Callback stored in the counter's method slot.
///
/// Equality is identity: two `Method`s are equal only if they wrap the
/// same closure.
#[derive(Clone)]
pub struct Method(Arc<dyn Fn() + Send + Sync>);

impl Method {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    pub counter: i64,
    pub method: Option<Method>,
}

impl State for CounterState {}

#[derive(Debug, Clone)]
pub enum CounterAction {
    Increment,
    Decrement,
    /// Replace the method slot.
    SetMethod(Method),
}

impl Intent for CounterAction {}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterAction::Increment => CounterState {
                counter: state.counter.wrapping_add(1),
                ..state
            },
            CounterAction::Decrement => CounterState {
                counter: state.counter.wrapping_sub(1),
                ..state
            },
            CounterAction::SetMethod(method) => CounterState {
                method: Some(method),
                ..state
            },
        }
    }
}

/// Shared handle over the counter state; clones observe the same value.
#[derive(Clone)]
pub struct CounterStore {
    tx: Arc<watch::Sender<CounterState>>,
}

impl CounterStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CounterState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn dispatch(&self, action: CounterAction) {
        self.tx
            .send_modify(|state| dispatch::<CounterReducer>(state, action));
        tracing::trace!(counter = self.value(), "Counter updated");
    }

    pub fn value(&self) -> i64 {
        self.tx.borrow().counter
    }

    pub fn snapshot(&self) -> CounterState {
        self.tx.borrow().clone()
    }

    /// Call the stored method, if any. Returns whether one was set.
    pub fn invoke_method(&self) -> bool {
        // Clone out so the callback may dispatch without holding the borrow.
        let method = self.tx.borrow().method.clone();
        match method {
            Some(method) => {
                method.call();
                true
            }
            None => false,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.tx.subscribe()
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}
