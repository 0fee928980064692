//! Story list feature module.
//!
//! Holds the fetched stories and the loading/error flags.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Story list plus `is_loading` / `is_error`
//! - `intent.rs` - Fetch lifecycle, history reload, dismissal
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `observer.rs` - Tracing observer for dispatched intents

mod error;
mod intent;
mod observer;
mod reducer;
mod state;

pub use error::StoriesError;
pub use intent::{ActionKind, StoriesIntent};
pub use observer::TracingObserver;
pub use reducer::StoriesReducer;
pub use state::StoriesState;
