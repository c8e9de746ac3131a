//! Intents for the home pager.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the pager reducer.
///
/// Page indices are already validated against the page count by the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PagerIntent {
    /// Pager is shown; announce the settled page if nothing was announced yet.
    Attach,

    /// Tab clicked: animate to the page.
    SelectTab(usize),

    /// In-content shortcut: move to the page without animating.
    JumpToPage(usize),

    /// Animation frame from the transition with `generation`.
    Frame { generation: u64, progress: f32 },

    /// The animation with `generation` reached its target.
    Settle { generation: u64 },

    /// Finger drag toward `target`.
    Drag { target: usize, progress: f32 },

    /// Finger lifted.
    Release,
}

impl Intent for PagerIntent {}
