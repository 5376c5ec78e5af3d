//! Ordered route matching.
//!
//! Patterns are compiled once at startup into an ordered list and walked in
//! registration order; the first structural match wins. Callers should
//! register literal-heavy patterns before parameterized ones so the more
//! specific route takes precedence.

use std::collections::HashMap;

use thiserror::Error;

use crate::auth::permission::Verb;
use crate::error::GatewayError;

/// Pattern compilation errors.
#[derive(Error, Debug)]
pub enum RoutePatternError {
    /// A `{}` placeholder without a name.
    #[error("empty parameter name in pattern {0}")]
    EmptyParam(String),

    /// An empty segment (`//` or a bare `/`).
    #[error("empty segment in pattern {0}")]
    EmptySegment(String),
}

/// One compiled pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled method-agnostic path template such as `/applications/{name}`.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compiles a pattern. Segments wrapped in `{}` are named parameters;
    /// everything else must match literally.
    pub fn parse(pattern: &str) -> Result<Self, RoutePatternError> {
        let mut segments = Vec::new();
        for part in pattern.trim_start_matches('/').split('/') {
            if part.is_empty() {
                return Err(RoutePatternError::EmptySegment(pattern.to_string()));
            }
            if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                if name.is_empty() {
                    return Err(RoutePatternError::EmptyParam(pattern.to_string()));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }
        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.raw
    }

    /// Number of literal segments; a rough specificity measure.
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Matches a concrete path, binding parameter values. Segment counts
    /// must be equal, literals must match exactly, and a parameter matches
    /// any single non-empty segment.
    pub fn capture(&self, path: &str) -> Option<PathParams> {
        let parts: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.insert(name.clone(), part.to_string());
                }
                _ => return None,
            }
        }
        Some(PathParams(params))
    }
}

/// Parameter values bound by a successful match.
#[derive(Debug, Clone, Default)]
pub struct PathParams(HashMap<String, String>);

impl PathParams {
    /// Looks up a bound parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Looks up a parameter the matched pattern is known to bind.
    pub fn require(&self, name: &str) -> Result<&str, GatewayError> {
        self.get(name).ok_or_else(|| {
            GatewayError::Collaborator(anyhow::anyhow!(
                "matched route did not bind parameter {name}"
            ))
        })
    }
}

struct Route<H> {
    verb: Verb,
    pattern: RoutePattern,
    handler: H,
}

/// Ordered route table. Registration order is match precedence.
pub struct Router<H> {
    routes: Vec<Route<H>>,
}

impl<H> Router<H> {
    /// An empty table.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registers a route. Later registrations only match what earlier ones
    /// do not.
    pub fn route(mut self, verb: Verb, pattern: RoutePattern, handler: H) -> Self {
        self.routes.push(Route {
            verb,
            pattern,
            handler,
        });
        self
    }

    /// Finds the first registered route matching the verb and path.
    pub fn match_route(&self, verb: Verb, path: &str) -> Option<(&H, PathParams)> {
        self.routes
            .iter()
            .filter(|route| route.verb == verb)
            .find_map(|route| {
                route
                    .pattern
                    .capture(path)
                    .map(|params| (&route.handler, params))
            })
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
