//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are values: cloned to keep a snapshot, compared to detect change,
/// and defaulted to get the startup state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
