//! Model-View-Intent (MVI) primitives shared by the router and the pager.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ View / host callbacks
//!    ↑                                              │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: value describing everything the view needs
//! - **Intent**: user gesture or system event (tab click, animation frame)
//! - **Reducer**: pure transition that also lists the effects the owner
//!   must carry out (start an animation task, notify a page change)

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Reducer, Reduction};
pub use state::UiState;
