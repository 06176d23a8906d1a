/// Marker trait for UI state objects.
///
/// A state holds everything the view needs to render. `Default` is the
/// state of a freshly opened view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
