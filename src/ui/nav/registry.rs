//! Route registry: the closed set of screens the router can show.
//!
//! Patterns are parsed and checked for ambiguity once, when registered.
//! Navigation afterwards only binds parameters to an already validated
//! template.

use crate::error::{NavError, Result};

use super::route::{Route, RouteParams, RouteTemplate};

type ScreenBuilder<S> = Box<dyn Fn(&Route) -> S + Send + Sync>;

struct Registration<S> {
    template: RouteTemplate,
    build: ScreenBuilder<S>,
}

/// Ordered table of `pattern → screen builder` entries.
pub struct RouteRegistry<S> {
    routes: Vec<Registration<S>>,
}

impl<S> Default for RouteRegistry<S> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<S> RouteRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern and the builder producing its screen.
    ///
    /// # Errors
    /// - `InvalidSegment` if the pattern is malformed
    /// - `AmbiguousPattern` if an earlier pattern has the same shape
    pub fn register<F>(&mut self, pattern: &str, build: F) -> Result<()>
    where
        F: Fn(&Route) -> S + Send + Sync + 'static,
    {
        let template = RouteTemplate::parse(pattern)?;
        if let Some(existing) = self
            .routes
            .iter()
            .find(|r| r.template.same_shape(&template))
        {
            return Err(NavError::AmbiguousPattern {
                pattern: pattern.to_string(),
                existing: existing.template.pattern().to_string(),
            });
        }

        tracing::debug!(pattern, "route registered");
        self.routes.push(Registration {
            template,
            build: Box::new(build),
        });
        Ok(())
    }

    /// Chaining form of [`register`](Self::register).
    pub fn with<F>(mut self, pattern: &str, build: F) -> Result<Self>
    where
        F: Fn(&Route) -> S + Send + Sync + 'static,
    {
        self.register(pattern, build)?;
        Ok(self)
    }

    /// Bind `params` to the registered `template`.
    pub fn resolve(&self, template: &str, params: &RouteParams) -> Result<Route> {
        self.find(template)?.template.bind(params)
    }

    /// Reconstruct a route from a concrete path. First registered match wins.
    pub fn match_path(&self, path: &str) -> Result<Route> {
        self.routes
            .iter()
            .find_map(|r| {
                r.template
                    .match_path(path)
                    .map(|captured| r.template.bind(&captured))
            })
            .unwrap_or_else(|| {
                Err(NavError::UnmatchedPath {
                    path: path.to_string(),
                })
            })
    }

    /// Build the screen for a route produced by this registry.
    pub fn build(&self, route: &Route) -> Result<S> {
        Ok((self.find(route.template())?.build)(route))
    }

    /// Registered patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.template.pattern())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn find(&self, template: &str) -> Result<&Registration<S>> {
        self.routes
            .iter()
            .find(|r| r.template.pattern() == template)
            .ok_or_else(|| NavError::UnknownRoute {
                template: template.to_string(),
            })
    }
}
