//! State for the home pager.

use crate::ui::mvi::UiState;

/// What started a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSource {
    /// Animated scroll requested by a tab click.
    Animation,
    /// Finger drag on the page surface.
    Drag,
}

/// Whether the pager is at rest or moving toward a page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transition {
    #[default]
    Settled,
    Animating {
        target: usize,
        /// Fraction of the way from the settled page to `target`, in `[0, 1]`.
        progress: f32,
        /// Identifies the transition; frames from older transitions are ignored.
        generation: u64,
        source: TransitionSource,
    },
}

/// Pager state: one authoritative settled page plus the transition in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagerState {
    pub page_count: usize,
    pub settled_page: usize,
    pub transition: Transition,
    /// Last page announced to the page-change callback. `None` until the
    /// first announcement.
    pub last_reported: Option<usize>,
    /// Generation handed to the next transition.
    pub next_generation: u64,
}

impl UiState for PagerState {}

/// Rendering of one tab in the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabIndicator {
    pub index: usize,
    pub selected: bool,
    /// Highlight strength in `[0, 1]`, interpolated while animating.
    pub emphasis: f32,
}

impl PagerState {
    pub fn new(page_count: usize, initial_page: usize) -> Self {
        Self {
            page_count,
            settled_page: initial_page,
            transition: Transition::Settled,
            last_reported: None,
            next_generation: 1,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.transition, Transition::Settled)
    }

    /// Generation of the transition in flight, if any.
    pub fn generation(&self) -> Option<u64> {
        match self.transition {
            Transition::Settled => None,
            Transition::Animating { generation, .. } => Some(generation),
        }
    }

    /// The tab that reads as selected: the settled page at rest, and while
    /// moving whichever end of the transition is closer.
    pub fn selected_tab(&self) -> usize {
        match self.transition {
            Transition::Settled => self.settled_page,
            Transition::Animating {
                target, progress, ..
            } => {
                if progress >= 0.5 {
                    target
                } else {
                    self.settled_page
                }
            }
        }
    }

    /// One indicator per page. Exactly one is selected.
    pub fn tab_strip(&self) -> Vec<TabIndicator> {
        let selected = self.selected_tab();
        (0..self.page_count)
            .map(|index| TabIndicator {
                index,
                selected: index == selected,
                emphasis: self.emphasis(index),
            })
            .collect()
    }

    fn emphasis(&self, index: usize) -> f32 {
        match self.transition {
            Transition::Settled => {
                if index == self.settled_page {
                    1.0
                } else {
                    0.0
                }
            }
            Transition::Animating {
                target, progress, ..
            } => {
                if index == self.settled_page && index == target {
                    1.0
                } else if index == self.settled_page {
                    1.0 - progress
                } else if index == target {
                    progress
                } else {
                    0.0
                }
            }
        }
    }
}
