//! Reducer for the back-stack.

use crate::ui::mvi::{Reducer, Reduction};

use super::intent::NavIntent;
use super::route::Route;
use super::state::BackStack;

/// Effects the router carries out after a back-stack transition.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEffect {
    /// The top of the stack changed; publish it to observers.
    RouteChanged(Route),

    /// An entry left the stack. `depth` is its 1-based position before the
    /// pop, used to settle pending navigation results.
    Popped { route: Route, depth: usize },
}

/// Back-stack transitions: push, guarded pop, restart.
pub struct NavReducer;

impl Reducer for NavReducer {
    type State = BackStack;
    type Intent = NavIntent;
    type Effect = NavEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Self::Effect> {
        match intent {
            NavIntent::Start(root) => {
                state.reset(root.clone());
                Reduction::with_effects(state, vec![NavEffect::RouteChanged(root)])
            }
            NavIntent::Push(route) => {
                state.push(route.clone());
                Reduction::with_effects(state, vec![NavEffect::RouteChanged(route)])
            }
            NavIntent::Pop => {
                let depth = state.depth();
                let Some(popped) = state.pop() else {
                    // Root stays put.
                    return Reduction::state(state);
                };
                let mut effects = vec![NavEffect::Popped {
                    route: popped,
                    depth,
                }];
                if let Some(top) = state.top() {
                    effects.push(NavEffect::RouteChanged(top.clone()));
                }
                Reduction::with_effects(state, effects)
            }
        }
    }
}
