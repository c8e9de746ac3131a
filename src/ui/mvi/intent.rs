//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User gestures (tab clicks, swipes, back presses)
/// - System events (animation frames, settle notifications)
/// - Navigation requests that were already resolved into a route
pub trait Intent: Send + 'static {}
