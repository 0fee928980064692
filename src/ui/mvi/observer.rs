//! Observers for dispatched intents.

use super::reducer::Reducer;

/// Sees every intent dispatched to reducer `R`, together with the state it
/// is about to be applied to.
///
/// Observers cannot change the outcome. They exist so logging and
/// diagnostics stay out of the reducers.
pub trait IntentObserver<R: Reducer>: Send {
    fn observe(&self, intent: &R::Intent, before: &R::State);
}
