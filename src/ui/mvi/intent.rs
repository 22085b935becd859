//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (start, stop, pattern selection)
/// - Timer firings (phase elapsed, message period elapsed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
