//! Error types for navigation and page selection.
//!
//! Route construction problems are reported when a route is built, never
//! after the stack has changed. Popping the root route is not an error and
//! has no variant here.

use thiserror::Error;

/// Errors raised by the router, the route registry and the pager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A named segment of the template has no bound value.
    #[error("Route '{template}' is missing a value for '{{{param}}}'")]
    UnresolvedParameter { template: String, param: String },

    /// The template was never registered.
    #[error("Route '{template}' is not registered")]
    UnknownRoute { template: String },

    /// A pattern collides with one registered earlier (same literals,
    /// parameters in the same positions).
    #[error("Route pattern '{pattern}' is ambiguous with '{existing}'")]
    AmbiguousPattern { pattern: String, existing: String },

    /// A template or parameter value is malformed (empty, or contains the
    /// path separator).
    #[error("Invalid route segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: &'static str },

    /// A concrete path matched none of the registered patterns.
    #[error("No route matches path '{path}'")]
    UnmatchedPath { path: String },

    /// A tab or page index outside `[0, page_count)`.
    #[error("Page index {index} is out of range (page count {page_count})")]
    OutOfRangeSelection { index: usize, page_count: usize },
}

pub type Result<T> = std::result::Result<T, NavError>;
