//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (search edits, item taps, counter taps)
/// - System events (fetch resolved or failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
