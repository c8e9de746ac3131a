//! Navigation feature module.
//!
//! Routes screens by string templates with named parameters and keeps the
//! back-stack.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Back-stack of resolved routes (root never popped)
//! - `intent.rs` - Stack operations (Start, Push, Pop)
//! - `reducer.rs` - Stack transitions (pure, effects returned as values)
//!
//! Around it:
//! - `route.rs` - Template parsing, parameter binding, path matching
//! - `registry.rs` - Pattern table validated at registration
//! - `router.rs` - Facade: resolve, dispatch, publish, navigation results

mod intent;
mod reducer;
mod registry;
mod route;
mod router;
mod state;

pub use intent::NavIntent;
pub use reducer::{NavEffect, NavReducer};
pub use registry::RouteRegistry;
pub use route::{params, Route, RouteParams, RouteTemplate, Segment, SEPARATOR};
pub use router::{NavResult, Router};
pub use state::BackStack;
