//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of screen state (stories, history) is owned by `App` and
//! changes only through a reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable value the view renders from
//! - **Intent**: User action or fetch outcome
//! - **Reducer**: Pure function that maps (State, Intent) to the next State
//! - **Observer**: Optional side channel that sees each intent before it is reduced

mod intent;
mod observer;
mod reducer;
mod state;

pub use intent::Intent;
pub use observer::IntentObserver;
pub use reducer::Reducer;
pub use state::UiState;
