//! State for the back-stack.

use crate::ui::mvi::UiState;

use super::route::Route;

/// Ordered navigation history, oldest first.
///
/// Empty only before the router has started; afterwards the first entry is
/// the root and is never popped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackStack {
    entries: Vec<Route>,
}

impl UiState for BackStack {}

impl BackStack {
    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    pub fn top(&self) -> Option<&Route> {
        self.entries.last()
    }

    pub fn root(&self) -> Option<&Route> {
        self.entries.first()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// True when a pop would remove something.
    pub fn can_pop(&self) -> bool {
        self.entries.len() > 1
    }

    /// Concrete paths, oldest first.
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(Route::path).collect()
    }

    pub(super) fn push(&mut self, route: Route) {
        self.entries.push(route);
    }

    pub(super) fn pop(&mut self) -> Option<Route> {
        if self.can_pop() {
            self.entries.pop()
        } else {
            None
        }
    }

    pub(super) fn reset(&mut self, root: Route) {
        self.entries.clear();
        self.entries.push(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let stack = BackStack::default();
        assert_eq!(stack.depth(), 0);
        assert!(stack.top().is_none());
        assert!(!stack.can_pop());
    }
}
