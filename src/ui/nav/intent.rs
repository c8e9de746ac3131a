//! Intents for the back-stack.

use crate::ui::mvi::Intent;

use super::route::Route;

/// Intents that can be dispatched to the back-stack reducer.
///
/// Routes arrive already resolved: a malformed navigation request never
/// reaches the reducer.
#[derive(Debug)]
pub enum NavIntent {
    /// Replace the whole stack with a single root entry.
    Start(Route),

    /// Push a route on top of the stack.
    Push(Route),

    /// Pop the top route. Ignored at the root.
    Pop,
}

impl Intent for NavIntent {}
