//! Error types for rentify-router

use crate::validate::Shadowed;
use thiserror::Error;

/// Result type alias for router operations
pub type Result<T> = std::result::Result<T, Error>;

/// Router errors
#[derive(Debug, Error)]
pub enum Error {
    /// Navigation target is not a usable path
    #[error("Invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Pattern could not be parsed
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    /// Route table rejected at build time
    #[error("Invalid route table: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// No route matched (only reachable on a table without a catch-all)
    #[error("No route matches `{0}`")]
    Unmatched(String),
}

/// Pattern syntax errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern `{pattern}` has a parameter without a name")]
    UnnamedParam { pattern: String },

    #[error("pattern `{pattern}`: `*` must be the last segment")]
    WildcardNotLast { pattern: String },

    #[error("pattern `{pattern}`: `{segment}` is not a valid wildcard, only a bare `*` is supported")]
    InvalidWildcard { pattern: String, segment: String },

    #[error("pattern `{pattern}` binds `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// A single problem found while validating a route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: {source}")]
    Pattern { index: usize, source: PatternError },

    #[error("route #{index} `{pattern}` duplicates route #{first}")]
    DuplicatePattern {
        index: usize,
        pattern: String,
        first: usize,
    },

    #[error("no catch-all `*` route, unmatched paths would have no view")]
    MissingFallback,

    #[error("{0}")]
    ShadowedRoute(Shadowed),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
