//! Terminal UI: the store owner and its rendering.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod history;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod sort;
pub mod stories;
pub mod terminal_guard;
pub mod theme;
