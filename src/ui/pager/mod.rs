//! Home pager feature module.
//!
//! Couples a swipeable page surface, a tab strip and in-content page jumps
//! to one authoritative settled page.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Settled page + transition (Settled / Animating)
//! - `intent.rs` - Tab clicks, jumps, drags, animation frames
//! - `reducer.rs` - Transitions (pure, effects returned as values)
//! - `sync.rs` - Driver running animation tasks and the page-change callback
//! - `page.rs` - Page descriptors for the two home pages

mod intent;
mod page;
mod reducer;
mod state;
mod sync;

pub use intent::PagerIntent;
pub use page::{HomePage, PageDescriptor};
pub use reducer::{PagerEffect, PagerReducer};
pub use state::{PagerState, TabIndicator, Transition, TransitionSource};
pub use sync::{AnimationTiming, PageChangeCallback, PagerTabSync};
