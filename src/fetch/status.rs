//! Lifecycle of a single remote read.

use crate::fetch::error::FetchError;
use crate::mvi::{Intent, Reducer, State};

/// Where the current fetch stands. Exactly one is current per controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    /// Never activated.
    #[default]
    Idle,
    /// A read is in flight.
    Pending,
    /// The last read produced a dataset.
    Success,
    /// The last read failed; terminal until the next activation.
    Failed { error: FetchError },
}

impl State for FetchStatus {}

impl FetchStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Lowercase label for logs and the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// A new read was issued (first activation or refresh).
    Activate,
    /// The in-flight read produced a dataset.
    Succeeded,
    /// The in-flight read failed.
    Failed { error: FetchError },
}

impl Intent for FetchIntent {}

pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchStatus;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Activation always replaces whatever was there, including a
            // prior error.
            FetchIntent::Activate => FetchStatus::Pending,

            FetchIntent::Succeeded => match state {
                FetchStatus::Pending => FetchStatus::Success,
                other => other,
            },

            FetchIntent::Failed { error } => match state {
                FetchStatus::Pending => FetchStatus::Failed { error },
                other => other,
            },
        }
    }
}
