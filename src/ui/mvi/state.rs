/// Marker for UI state objects.
///
/// A state is cloned to publish snapshots and compared to skip redraws, and
/// its `Default` is the value before anything happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
