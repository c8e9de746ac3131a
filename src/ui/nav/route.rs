//! Route templates and resolved routes.
//!
//! A template such as `detail/{id}` is split on `/` into literal and named
//! segments once, at registration. Binding a template to parameter values
//! yields a [`Route`] whose concrete path (`detail/42`) is fixed at
//! construction.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{NavError, Result};

/// Separator between route segments. Parameter values may not contain it.
pub const SEPARATOR: char = '/';

/// Named parameter values for a route, keyed by segment name.
pub type RouteParams = BTreeMap<String, String>;

/// Build [`RouteParams`] from name/value pairs.
pub fn params<I, K, V>(pairs: I) -> RouteParams
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// One `/`-delimited piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must match the path token exactly.
    Literal(String),
    /// Captures any non-empty token without a separator.
    Param(String),
}

/// A parsed route pattern, e.g. `gallery/{name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    pattern: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse a pattern.
    ///
    /// Rejects empty segments, unbalanced braces and parameter names used
    /// twice in the same pattern.
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason| NavError::InvalidSegment {
            segment: pattern.to_string(),
            reason,
        };

        if pattern.is_empty() {
            return Err(invalid("empty pattern"));
        }

        let mut segments = Vec::new();
        for raw in pattern.split(SEPARATOR) {
            if raw.is_empty() {
                return Err(invalid("empty segment"));
            }
            let segment = match raw.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
                Some(name) => {
                    if name.is_empty() || name.contains(['{', '}']) {
                        return Err(invalid("malformed parameter name"));
                    }
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                    {
                        return Err(invalid("duplicate parameter name"));
                    }
                    Segment::Param(name.to_string())
                }
                None if raw.contains(['{', '}']) => return Err(invalid("unbalanced brace")),
                None => Segment::Literal(raw.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters, in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// True when both templates have the same segment count, the same
    /// literals and parameters in the same positions. Such templates differ
    /// only in parameter names and cannot be told apart by a path.
    pub fn same_shape(&self, other: &RouteTemplate) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Bind parameter values, producing a concrete route.
    ///
    /// Every named segment needs a value; values must be non-empty and must
    /// not contain [`SEPARATOR`]. Entries in `params` that the template does
    /// not name are dropped.
    pub fn bind(&self, params: &RouteParams) -> Result<Route> {
        let mut bound = RouteParams::new();
        let mut tokens = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => tokens.push(text.clone()),
                Segment::Param(name) => {
                    let value =
                        params
                            .get(name)
                            .ok_or_else(|| NavError::UnresolvedParameter {
                                template: self.pattern.clone(),
                                param: name.clone(),
                            })?;
                    validate_value(value)?;
                    tokens.push(value.clone());
                    bound.insert(name.clone(), value.clone());
                }
            }
        }

        Ok(Route {
            template: self.pattern.clone(),
            params: bound,
            path: tokens.join("/"),
        })
    }

    /// Match a concrete path, returning the captured parameters.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let tokens: Vec<&str> = path.split(SEPARATOR).collect();
        if tokens.len() != self.segments.len() {
            return None;
        }

        let mut captured = RouteParams::new();
        for (segment, token) in self.segments.iter().zip(tokens) {
            match segment {
                Segment::Literal(text) if text == token => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if token.is_empty() => return None,
                Segment::Param(name) => {
                    captured.insert(name.clone(), token.to_string());
                }
            }
        }
        Some(captured)
    }
}

fn validate_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(NavError::InvalidSegment {
            segment: value.to_string(),
            reason: "empty parameter value",
        });
    }
    if value.contains(SEPARATOR) {
        return Err(NavError::InvalidSegment {
            segment: value.to_string(),
            reason: "parameter value contains '/'",
        });
    }
    Ok(())
}

/// A template with all of its parameters bound. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    template: String,
    params: RouteParams,
    path: String,
}

impl Route {
    /// The pattern this route was built from, e.g. `detail/{id}`.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The concrete path, e.g. `detail/42`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_literals_and_params() {
        let template = RouteTemplate::parse("detail/{id}").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("detail".to_string()),
                Segment::Param("id".to_string())
            ]
        );
        assert_eq!(template.param_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn parse_rejects_malformed_patterns() {
        for pattern in ["", "detail//x", "detail/{}", "detail/{id", "a/{x}/{x}"] {
            assert!(
                matches!(
                    RouteTemplate::parse(pattern),
                    Err(NavError::InvalidSegment { .. })
                ),
                "pattern {pattern:?} should be rejected"
            );
        }
    }

    #[test]
    fn bind_produces_concrete_path() {
        let template = RouteTemplate::parse("gallery/{name}").unwrap();
        let route = template.bind(&params([("name", "Tomato")])).unwrap();
        assert_eq!(route.path(), "gallery/Tomato");
        assert_eq!(route.template(), "gallery/{name}");
        assert_eq!(route.param("name"), Some("Tomato"));
    }

    #[test]
    fn bind_missing_param_is_unresolved() {
        let template = RouteTemplate::parse("detail/{id}").unwrap();
        let err = template.bind(&RouteParams::new()).unwrap_err();
        assert_eq!(
            err,
            NavError::UnresolvedParameter {
                template: "detail/{id}".to_string(),
                param: "id".to_string(),
            }
        );
    }

    #[test]
    fn bind_drops_unused_params() {
        let template = RouteTemplate::parse("home").unwrap();
        let route = template.bind(&params([("id", "1")])).unwrap();
        assert!(route.params().is_empty());
        assert_eq!(route.path(), "home");
    }

    #[test]
    fn bind_rejects_separator_in_value() {
        let template = RouteTemplate::parse("gallery/{name}").unwrap();
        let err = template.bind(&params([("name", "a/b")])).unwrap_err();
        assert!(matches!(err, NavError::InvalidSegment { .. }));
    }

    #[test]
    fn match_path_captures_params() {
        let template = RouteTemplate::parse("detail/{id}").unwrap();
        assert_eq!(template.match_path("detail/42"), Some(params([("id", "42")])));
        assert_eq!(template.match_path("detail"), None);
        assert_eq!(template.match_path("detail/"), None);
        assert_eq!(template.match_path("gallery/42"), None);
        assert_eq!(template.match_path("detail/42/x"), None);
    }

    #[test]
    fn same_shape_ignores_param_names() {
        let a = RouteTemplate::parse("detail/{id}").unwrap();
        let b = RouteTemplate::parse("detail/{plantId}").unwrap();
        let c = RouteTemplate::parse("detail/new").unwrap();
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }
}
