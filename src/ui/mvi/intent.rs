/// Marker for intent objects.
///
/// Intents cover user actions (open a form, type into a field) and remote
/// outcomes (list loaded, product created).
pub trait Intent: Send + 'static {}
