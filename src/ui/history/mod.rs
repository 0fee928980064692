//! Search history feature module.
//!
//! Remembers the last few searches together with their results so a
//! previous search can be shown again without another request.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Bounded most-recent-first entry list plus popup cursor
//! - `intent.rs` - Record a search, move the cursor
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `dialog.rs` - Popup rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_history_dialog;
pub use intent::HistoryIntent;
pub use reducer::{HistoryReducer, MAX_ENTRIES};
pub use state::{HistoryState, PreviousSearch};
