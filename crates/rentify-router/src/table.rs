//! Ordered route table
//!
//! Routes are tried in declaration order and the first structural match
//! wins. There is no specificity ranking: a broad route declared early
//! hides every narrower route after it. Such routes are reported when the
//! table is built but never reordered.

use crate::validate::{self, ShadowPolicy, Shadowed};
use crate::{Error, Location, Params, Pattern, Result, ValidationError};

/// A (pattern, view) entry
#[derive(Debug, Clone)]
pub struct Route<V> {
    pattern: Pattern,
    view: V,
}

impl<V> Route<V> {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Route match result
#[derive(Debug, Clone)]
pub struct Match<'a, V> {
    /// Position of the winning route in the table
    pub index: usize,
    pub route: &'a Route<V>,
    /// Captured path parameters
    pub params: Params,
    /// The navigation target that was resolved
    pub location: Location,
}

impl<'a, V> Match<'a, V> {
    pub fn view(&self) -> &'a V {
        &self.route.view
    }
}

/// Collects declarations, then validates them all at once
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    entries: Vec<(String, V)>,
    policy: ShadowPolicy,
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            policy: ShadowPolicy::default(),
        }
    }

    /// Append a route; order of calls is resolution order
    pub fn route(mut self, pattern: impl Into<String>, view: V) -> Self {
        self.entries.push((pattern.into(), view));
        self
    }

    pub fn shadow_policy(mut self, policy: ShadowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate and freeze the table
    ///
    /// Fails with [`Error::Validation`] listing every syntax error, duplicate
    /// pattern and, under [`ShadowPolicy::Deny`], every unreachable route. A
    /// table without a bare `*` route is always rejected since some paths
    /// would have nothing to render.
    pub fn build(self) -> Result<RouteTable<V>> {
        let mut errors = Vec::new();
        let mut parsed = Vec::with_capacity(self.entries.len());

        for (index, (raw, view)) in self.entries.into_iter().enumerate() {
            match Pattern::parse(&raw) {
                Ok(pattern) => parsed.push((index, Route { pattern, view })),
                Err(source) => errors.push(ValidationError::Pattern { index, source }),
            }
        }

        let report = {
            let patterns: Vec<(usize, &Pattern)> =
                parsed.iter().map(|(i, r)| (*i, &r.pattern)).collect();
            validate::analyze(&patterns)
        };
        errors.extend(report.errors);

        if self.policy == ShadowPolicy::Deny {
            errors.extend(
                report
                    .shadowed
                    .iter()
                    .cloned()
                    .map(ValidationError::ShadowedRoute),
            );
        }

        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        for s in &report.shadowed {
            tracing::warn!(
                route = s.index,
                pattern = %s.pattern,
                shadowed_by = s.by_index,
                by_pattern = %s.by_pattern,
                "route is unreachable"
            );
        }

        Ok(RouteTable {
            routes: parsed.into_iter().map(|(_, route)| route).collect(),
            shadowed: report.shadowed,
        })
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated, immutable route table
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    shadowed: Vec<Shadowed>,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Resolve a navigation target to the first matching route
    ///
    /// # Example
    /// ```
    /// use rentify_router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/", "home")
    ///     .route("items/:id", "item")
    ///     .route("*", "not-found")
    ///     .build()
    ///     .unwrap();
    ///
    /// let m = table.resolve("/items/42").unwrap();
    /// assert_eq!(*m.view(), "item");
    /// assert_eq!(m.params.get("id"), Some("42"));
    /// ```
    pub fn resolve(&self, path: &str) -> Result<Match<'_, V>> {
        let location = Location::parse(path)?;

        let found = {
            let segments = location.segments();
            self.routes.iter().enumerate().find_map(|(index, route)| {
                route
                    .pattern
                    .match_segments(&segments)
                    .map(|params| (index, route, params))
            })
        };

        match found {
            Some((index, route, params)) => {
                tracing::debug!(path, index, pattern = %route.pattern, "route matched");
                Ok(Match {
                    index,
                    route,
                    params,
                    location,
                })
            }
            None => Err(Error::Unmatched(path.to_string())),
        }
    }

    /// Routes that can never be selected, in table order
    pub fn shadowed(&self) -> &[Shadowed] {
        &self.shadowed
    }

    pub fn is_reachable(&self, index: usize) -> bool {
        index < self.routes.len() && !self.shadowed.iter().any(|s| s.index == index)
    }

    /// Position of the first route declared with an equivalent pattern
    pub fn position(&self, pattern: &str) -> Option<usize> {
        let pattern = Pattern::parse(pattern).ok()?;
        self.routes.iter().position(|r| r.pattern == pattern)
    }

    pub fn get(&self, index: usize) -> Option<&Route<V>> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
