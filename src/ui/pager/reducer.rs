//! Reducer for the home pager.

use crate::ui::mvi::{Reducer, Reduction};

use super::intent::PagerIntent;
use super::state::{PagerState, Transition, TransitionSource};

/// Effects the pager driver carries out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum PagerEffect {
    /// Spawn the animation task for `generation`.
    StartAnimation { target: usize, generation: u64 },
    /// Abort the animation task for `generation`. Its target is never announced.
    CancelAnimation { generation: u64 },
    /// Announce the newly settled page.
    PageChanged(usize),
}

/// Pager transitions.
///
/// Pure function: spawning and aborting animation tasks and invoking the
/// page-change callback are left to the caller.
pub struct PagerReducer;

impl Reducer for PagerReducer {
    type State = PagerState;
    type Intent = PagerIntent;
    type Effect = PagerEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Reduction<Self::State, Self::Effect> {
        let mut effects = Vec::new();

        match intent {
            PagerIntent::Attach => {
                if state.is_settled() {
                    let page = state.settled_page;
                    settle(&mut state, page, &mut effects);
                }
            }

            PagerIntent::SelectTab(target) => match state.transition {
                // Resting there already; announce only if nothing was.
                Transition::Settled if target == state.settled_page => {
                    settle(&mut state, target, &mut effects);
                }
                Transition::Animating {
                    target: current,
                    source: TransitionSource::Animation,
                    ..
                } if current == target => {}
                _ => {
                    cancel_in_flight(&state, &mut effects);
                    let generation = state.next_generation;
                    state.next_generation += 1;
                    state.transition = Transition::Animating {
                        target,
                        progress: 0.0,
                        generation,
                        source: TransitionSource::Animation,
                    };
                    effects.push(PagerEffect::StartAnimation { target, generation });
                }
            },

            PagerIntent::JumpToPage(target) => {
                let interrupted = !state.is_settled();
                cancel_in_flight(&state, &mut effects);
                if interrupted {
                    // A jump that interrupts a transition is always announced.
                    state.last_reported = None;
                }
                settle(&mut state, target, &mut effects);
            }

            PagerIntent::Frame {
                generation,
                progress,
            } => {
                if let Transition::Animating {
                    generation: current,
                    progress: ref mut current_progress,
                    ..
                } = state.transition
                {
                    if current == generation {
                        *current_progress = progress.clamp(0.0, 1.0);
                    }
                }
            }

            PagerIntent::Settle { generation } => {
                if let Transition::Animating {
                    target,
                    generation: current,
                    ..
                } = state.transition
                {
                    if current == generation {
                        settle(&mut state, target, &mut effects);
                    }
                }
            }

            PagerIntent::Drag { target, progress } => {
                let progress = progress.clamp(0.0, 1.0);
                match state.transition {
                    Transition::Animating {
                        generation,
                        source: TransitionSource::Drag,
                        ..
                    } => {
                        state.transition = Transition::Animating {
                            target,
                            progress,
                            generation,
                            source: TransitionSource::Drag,
                        };
                    }
                    _ => {
                        cancel_in_flight(&state, &mut effects);
                        let generation = state.next_generation;
                        state.next_generation += 1;
                        state.transition = Transition::Animating {
                            target,
                            progress,
                            generation,
                            source: TransitionSource::Drag,
                        };
                    }
                }
            }

            PagerIntent::Release => {
                if let Transition::Animating {
                    target,
                    progress,
                    source: TransitionSource::Drag,
                    ..
                } = state.transition
                {
                    let page = if progress >= 0.5 {
                        target
                    } else {
                        state.settled_page
                    };
                    settle(&mut state, page, &mut effects);
                }
            }
        }

        Reduction::with_effects(state, effects)
    }
}

fn cancel_in_flight(state: &PagerState, effects: &mut Vec<PagerEffect>) {
    if let Transition::Animating {
        generation,
        source: TransitionSource::Animation,
        ..
    } = state.transition
    {
        effects.push(PagerEffect::CancelAnimation { generation });
    }
}

/// Come to rest on `page`, announcing it only if it differs from the last
/// announced page.
fn settle(state: &mut PagerState, page: usize, effects: &mut Vec<PagerEffect>) {
    state.settled_page = page;
    state.transition = Transition::Settled;
    if state.last_reported != Some(page) {
        state.last_reported = Some(page);
        effects.push(PagerEffect::PageChanged(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(initial: usize) -> PagerState {
        PagerReducer::reduce(PagerState::new(2, initial), PagerIntent::Attach).state
    }

    #[test]
    fn attach_announces_initial_page_once() {
        let reduction = PagerReducer::reduce(PagerState::new(2, 0), PagerIntent::Attach);
        assert_eq!(reduction.effects, vec![PagerEffect::PageChanged(0)]);

        let again = PagerReducer::reduce(reduction.state, PagerIntent::Attach);
        assert!(again.effects.is_empty());
    }

    #[test]
    fn select_tab_starts_animation() {
        let reduction = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(1));
        assert_eq!(
            reduction.effects,
            vec![PagerEffect::StartAnimation {
                target: 1,
                generation: 1
            }]
        );
        assert_eq!(reduction.state.settled_page, 0);
        assert_eq!(reduction.state.generation(), Some(1));
    }

    #[test]
    fn select_current_tab_is_noop() {
        let reduction = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(0));
        assert!(reduction.effects.is_empty());
        assert!(reduction.state.is_settled());
    }

    #[test]
    fn select_current_tab_announces_when_nothing_was_reported() {
        let reduction = PagerReducer::reduce(PagerState::new(2, 0), PagerIntent::SelectTab(0));
        assert_eq!(reduction.effects, vec![PagerEffect::PageChanged(0)]);
        assert!(reduction.state.is_settled());
        assert_eq!(reduction.state.last_reported, Some(0));
    }

    #[test]
    fn jump_while_settled_on_target_is_silent() {
        let reduction = PagerReducer::reduce(attached(1), PagerIntent::JumpToPage(1));
        assert!(reduction.effects.is_empty());
    }

    #[test]
    fn reselecting_animating_target_keeps_animation() {
        let state = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(1)).state;
        let reduction = PagerReducer::reduce(state, PagerIntent::SelectTab(1));
        assert!(reduction.effects.is_empty());
        assert_eq!(reduction.state.generation(), Some(1));
    }

    #[test]
    fn settle_announces_target() {
        let state = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(1)).state;
        let reduction = PagerReducer::reduce(state, PagerIntent::Settle { generation: 1 });
        assert_eq!(reduction.effects, vec![PagerEffect::PageChanged(1)]);
        assert_eq!(reduction.state.settled_page, 1);
        assert!(reduction.state.is_settled());
    }

    #[test]
    fn stale_frames_and_settles_are_ignored() {
        let state = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(1)).state;
        let state = PagerReducer::reduce(
            state,
            PagerIntent::Frame {
                generation: 7,
                progress: 0.9,
            },
        )
        .state;
        assert_eq!(state.selected_tab(), 0);

        let reduction = PagerReducer::reduce(state, PagerIntent::Settle { generation: 7 });
        assert!(reduction.effects.is_empty());
        assert!(!reduction.state.is_settled());
    }

    #[test]
    fn jump_cancels_animation_and_announces_only_jump_target() {
        let state = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(1)).state;
        let reduction = PagerReducer::reduce(state, PagerIntent::JumpToPage(0));
        assert_eq!(
            reduction.effects,
            vec![
                PagerEffect::CancelAnimation { generation: 1 },
                PagerEffect::PageChanged(0),
            ]
        );
        assert!(reduction.state.is_settled());

        // The cancelled animation's settle arrives late and is dropped.
        let late = PagerReducer::reduce(reduction.state, PagerIntent::Settle { generation: 1 });
        assert!(late.effects.is_empty());
        assert_eq!(late.state.settled_page, 0);
    }

    #[test]
    fn superseding_select_cancels_previous() {
        let mut state = PagerState::new(3, 0);
        state = PagerReducer::reduce(state, PagerIntent::Attach).state;
        state = PagerReducer::reduce(state, PagerIntent::SelectTab(1)).state;
        let reduction = PagerReducer::reduce(state, PagerIntent::SelectTab(2));
        assert_eq!(
            reduction.effects,
            vec![
                PagerEffect::CancelAnimation { generation: 1 },
                PagerEffect::StartAnimation {
                    target: 2,
                    generation: 2
                },
            ]
        );
    }

    #[test]
    fn frame_progress_is_clamped() {
        let state = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(1)).state;
        let state = PagerReducer::reduce(
            state,
            PagerIntent::Frame {
                generation: 1,
                progress: 3.0,
            },
        )
        .state;
        match state.transition {
            Transition::Animating { progress, .. } => assert_eq!(progress, 1.0),
            Transition::Settled => panic!("expected Animating"),
        }
    }

    #[test]
    fn drag_past_half_settles_on_target() {
        let state = PagerReducer::reduce(
            attached(0),
            PagerIntent::Drag {
                target: 1,
                progress: 0.3,
            },
        )
        .state;
        let state = PagerReducer::reduce(
            state,
            PagerIntent::Drag {
                target: 1,
                progress: 0.6,
            },
        )
        .state;
        let reduction = PagerReducer::reduce(state, PagerIntent::Release);
        assert_eq!(reduction.effects, vec![PagerEffect::PageChanged(1)]);
    }

    #[test]
    fn short_drag_springs_back_silently() {
        let state = PagerReducer::reduce(
            attached(0),
            PagerIntent::Drag {
                target: 1,
                progress: 0.2,
            },
        )
        .state;
        let reduction = PagerReducer::reduce(state, PagerIntent::Release);
        assert!(reduction.effects.is_empty());
        assert_eq!(reduction.state.settled_page, 0);
        assert!(reduction.state.is_settled());
    }

    #[test]
    fn drag_cancels_running_animation() {
        let state = PagerReducer::reduce(attached(0), PagerIntent::SelectTab(1)).state;
        let reduction = PagerReducer::reduce(
            state,
            PagerIntent::Drag {
                target: 1,
                progress: 0.1,
            },
        );
        assert_eq!(
            reduction.effects,
            vec![PagerEffect::CancelAnimation { generation: 1 }]
        );
    }

    #[test]
    fn release_without_drag_is_noop() {
        let reduction = PagerReducer::reduce(attached(1), PagerIntent::Release);
        assert!(reduction.effects.is_empty());
        assert_eq!(reduction.state.settled_page, 1);
    }
}
