//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// Result of one reducer step: the next state plus the effects the owner
/// has to run, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Reduction<S, E> {
    /// A transition with no effects.
    pub fn state(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It never
/// performs side effects itself; it describes them as `Effect` values.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Side effects the caller executes after storing the new state.
    type Effect;

    /// Process an intent and return the new state with its effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Self::Effect>;
}
