//! Router facade: resolves navigation requests against the registry and
//! drives the back-stack reducer.

use std::collections::BTreeMap;

use tokio::sync::{oneshot, watch};

use crate::error::Result;
use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::reducer::{NavEffect, NavReducer};
use super::registry::RouteRegistry;
use super::route::{Route, RouteParams};
use super::state::BackStack;

/// Value handed back to a screen that navigated for a result.
/// `None` when the destination was left without setting one.
pub type NavResult = Option<String>;

/// Navigation controller for one screen host.
///
/// Owns the back-stack; every change of the top entry is published on a
/// `watch` channel so views can re-render the active screen.
pub struct Router<S> {
    registry: RouteRegistry<S>,
    stack: BackStack,
    /// Result senders keyed by the stack depth of the entry that will
    /// produce the result.
    pending_results: BTreeMap<usize, oneshot::Sender<NavResult>>,
    current: watch::Sender<Route>,
}

impl<S> Router<S> {
    /// Create a router whose root is `start_destination`.
    ///
    /// # Errors
    /// Fails if the start destination is not registered or needs parameters.
    pub fn new(registry: RouteRegistry<S>, start_destination: &str) -> Result<Self> {
        let root = registry.resolve(start_destination, &RouteParams::new())?;
        let (current, _) = watch::channel(root.clone());
        let mut router = Self {
            registry,
            stack: BackStack::default(),
            pending_results: BTreeMap::new(),
            current,
        };
        router.dispatch(NavIntent::Start(root));
        Ok(router)
    }

    /// Resolve `template` with `params` and push it.
    ///
    /// Nothing changes when resolution fails.
    pub fn navigate(&mut self, template: &str, params: &RouteParams) -> Result<Route> {
        let route = self.registry.resolve(template, params)?;
        tracing::info!(path = route.path(), "navigate");
        self.dispatch(NavIntent::Push(route.clone()));
        Ok(route)
    }

    /// Push a route and receive the value the destination hands back when
    /// it is popped with [`navigate_up_with_result`](Self::navigate_up_with_result).
    pub fn navigate_for_result(
        &mut self,
        template: &str,
        params: &RouteParams,
    ) -> Result<oneshot::Receiver<NavResult>> {
        self.navigate(template, params)?;
        let (tx, rx) = oneshot::channel();
        self.pending_results.insert(self.stack.depth(), tx);
        Ok(rx)
    }

    /// Rebuild a route from a concrete path (deep link) and push it.
    pub fn navigate_to_path(&mut self, path: &str) -> Result<Route> {
        let route = self.registry.match_path(path)?;
        tracing::info!(path = route.path(), template = route.template(), "navigate to path");
        self.dispatch(NavIntent::Push(route.clone()));
        Ok(route)
    }

    /// Pop the top route. Returns `false`, changing nothing, at the root.
    pub fn navigate_up(&mut self) -> bool {
        if !self.stack.can_pop() {
            tracing::debug!("navigate up ignored at root");
            return false;
        }
        self.dispatch(NavIntent::Pop);
        true
    }

    /// Pop the top route, delivering `value` to whoever navigated to it for
    /// a result.
    pub fn navigate_up_with_result(&mut self, value: impl Into<String>) -> bool {
        if !self.stack.can_pop() {
            return false;
        }
        if let Some(tx) = self.pending_results.remove(&self.stack.depth()) {
            // Receiver may have been dropped; the pop still happens.
            let _ = tx.send(Some(value.into()));
        }
        self.dispatch(NavIntent::Pop);
        true
    }

    /// The route on top of the stack.
    pub fn current_route(&self) -> Route {
        self.current.borrow().clone()
    }

    /// Build the screen bound to the current route.
    pub fn current_screen(&self) -> Result<S> {
        self.registry.build(&self.current.borrow())
    }

    pub fn back_stack(&self) -> &BackStack {
        &self.stack
    }

    pub fn registry(&self) -> &RouteRegistry<S> {
        &self.registry
    }

    /// Observe current-route changes.
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }

    fn dispatch(&mut self, intent: NavIntent) {
        let reduction = NavReducer::reduce(std::mem::take(&mut self.stack), intent);
        self.stack = reduction.state;

        for effect in reduction.effects {
            match effect {
                NavEffect::RouteChanged(route) => {
                    tracing::debug!(path = route.path(), depth = self.stack.depth(), "current route changed");
                    self.current.send_replace(route);
                }
                NavEffect::Popped { route, depth } => {
                    tracing::debug!(path = route.path(), "route popped");
                    if let Some(tx) = self.pending_results.remove(&depth) {
                        let _ = tx.send(None);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::ui::nav::route::params;

    fn router() -> Router<String> {
        let registry = RouteRegistry::new()
            .with("home", |_| "home".to_string())
            .unwrap()
            .with("detail/{id}", |r| format!("detail {}", r.param("id").unwrap_or_default()))
            .unwrap();
        Router::new(registry, "home").unwrap()
    }

    #[test]
    fn starts_at_root() {
        let router = router();
        assert_eq!(router.back_stack().paths(), vec!["home"]);
        assert_eq!(router.current_screen().unwrap(), "home");
    }

    #[test]
    fn start_destination_must_be_parameterless() {
        let registry = RouteRegistry::<()>::new().with("detail/{id}", |_| ()).unwrap();
        assert!(matches!(
            Router::new(registry, "detail/{id}"),
            Err(NavError::UnresolvedParameter { .. })
        ));
    }

    #[test]
    fn failed_navigation_leaves_stack_alone() {
        let mut router = router();
        assert!(router.navigate("detail/{id}", &RouteParams::new()).is_err());
        assert_eq!(router.back_stack().depth(), 1);
        assert_eq!(router.current_route().path(), "home");
    }

    #[test]
    fn navigate_up_with_result_delivers_value() {
        let mut router = router();
        let mut rx = router
            .navigate_for_result("detail/{id}", &params([("id", "1")]))
            .unwrap();
        assert!(router.navigate_up_with_result("picked"));
        assert_eq!(rx.try_recv().unwrap(), Some("picked".to_string()));
    }

    #[test]
    fn plain_pop_resolves_pending_result_with_none() {
        let mut router = router();
        let mut rx = router
            .navigate_for_result("detail/{id}", &params([("id", "1")]))
            .unwrap();
        assert!(router.navigate_up());
        assert_eq!(rx.try_recv().unwrap(), None);
    }

    #[test]
    fn result_goes_to_the_matching_entry() {
        let mut router = router();
        let mut first = router
            .navigate_for_result("detail/{id}", &params([("id", "1")]))
            .unwrap();
        router.navigate("detail/{id}", &params([("id", "2")])).unwrap();

        router.navigate_up_with_result("ignored");
        assert!(first.try_recv().is_err());

        router.navigate_up_with_result("from-1");
        assert_eq!(first.try_recv().unwrap(), Some("from-1".to_string()));
    }
}
