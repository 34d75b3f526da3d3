//! Static route table checks
//!
//! Runs once when a table is built. Returns every problem found, not just
//! the first, so a broken table can be fixed in one pass.

use crate::{Pattern, ValidationError};
use std::fmt;

/// What to do with routes that can never be selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShadowPolicy {
    /// Keep the route, report it through `tracing` and `RouteTable::shadowed`
    #[default]
    Warn,
    /// Reject the table
    Deny,
}

/// A route made unreachable by an earlier, broader route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    /// Position of the unreachable route
    pub index: usize,
    pub pattern: String,
    /// Position of the first earlier route that covers it
    pub by_index: usize,
    pub by_pattern: String,
}

impl fmt::Display for Shadowed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route #{} `{}` is unreachable: shadowed by route #{} `{}`",
            self.index, self.pattern, self.by_index, self.by_pattern
        )
    }
}

#[derive(Debug, Default)]
pub(crate) struct Report {
    pub errors: Vec<ValidationError>,
    pub shadowed: Vec<Shadowed>,
}

/// Check parsed patterns, given as (declared index, pattern) in table order
pub(crate) fn analyze(patterns: &[(usize, &Pattern)]) -> Report {
    let mut report = Report::default();

    for (pos, &(index, pattern)) in patterns.iter().enumerate() {
        let earlier = &patterns[..pos];

        if let Some(&(first, _)) = earlier.iter().find(|(_, p)| *p == pattern) {
            report.errors.push(ValidationError::DuplicatePattern {
                index,
                pattern: pattern.as_str().to_string(),
                first,
            });
            continue;
        }

        if let Some(&(by_index, by)) = earlier.iter().find(|(_, p)| p.covers(pattern)) {
            report.shadowed.push(Shadowed {
                index,
                pattern: pattern.as_str().to_string(),
                by_index,
                by_pattern: by.as_str().to_string(),
            });
        }
    }

    if !patterns.iter().any(|(_, p)| p.is_catch_all()) {
        report.errors.push(ValidationError::MissingFallback);
    }

    report
}
