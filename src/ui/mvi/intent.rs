//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submit, dismiss, history selection)
/// - Fetch lifecycle events (started, succeeded, failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
