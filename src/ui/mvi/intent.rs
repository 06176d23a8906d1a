/// Marker trait for intent objects.
///
/// Intents are either user input (key presses, paste) or system events
/// (request completions, timer ticks).
pub trait Intent: Send + 'static {}
