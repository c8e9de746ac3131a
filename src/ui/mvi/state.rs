//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to snapshot, compared to detect changes,
/// and defaulted to the state a freshly built screen starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
