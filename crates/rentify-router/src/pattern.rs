//! Route patterns
//!
//! ## Path Syntax
//! - `items` - Literal segment, matched exactly against the decoded path
//!   segment (case-sensitive, so `/log%69n` matches `login`)
//! - `:id` - Named parameter (captures one non-empty segment)
//! - `*` - Catch-all (captures the remaining path, last segment only)
//!
//! Patterns are always anchored at the root: `items/:id` and `/items/:id`
//! are the same pattern. Empty segments and a trailing slash are ignored.

use crate::params::{Params, WILDCARD_PARAM};
use crate::PatternError;
use percent_encoding::percent_decode_str;
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One segment of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Param(String),
    Wildcard,
}

/// Parsed path template
///
/// Equality and hashing use the normalized segments, not the declared text.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    segments: SmallVec<[Segment; 4]>,
}

impl Pattern {
    /// Parse a pattern
    ///
    /// # Example
    /// ```
    /// use rentify_router::{Pattern, Segment};
    ///
    /// let p = Pattern::parse("items/:id").unwrap();
    /// assert_eq!(p, Pattern::parse("/items/:id").unwrap());
    /// assert_eq!(p.segments()[1], Segment::Param("id".to_string()));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }

        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments: SmallVec<[Segment; 4]> = SmallVec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::UnnamedParam {
                        pattern: raw.to_string(),
                    });
                }
                if name.contains('*') {
                    return Err(PatternError::InvalidWildcard {
                        pattern: raw.to_string(),
                        segment: part.to_string(),
                    });
                }
                let taken = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(n) if n == name));
                if taken {
                    return Err(PatternError::DuplicateParam {
                        pattern: raw.to_string(),
                        name: name.to_string(),
                    });
                }
                Segment::Param(name.to_string())
            } else if *part == "*" {
                if i + 1 != parts.len() {
                    return Err(PatternError::WildcardNotLast {
                        pattern: raw.to_string(),
                    });
                }
                Segment::Wildcard
            } else if part.contains('*') {
                return Err(PatternError::InvalidWildcard {
                    pattern: raw.to_string(),
                    segment: part.to_string(),
                });
            } else {
                Segment::Literal(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Pattern text as declared
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters this pattern binds, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Wildcard => Some(WILDCARD_PARAM),
            Segment::Literal(_) => None,
        })
    }

    /// True for the bare `*` pattern, which matches every path
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard])
    }

    /// Match already-split path segments
    ///
    /// Returns the bound parameters, or `None` if the structure differs.
    pub fn match_segments(&self, path: &[&str]) -> Option<Params> {
        let mut params = Params::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard => {
                    let rest = path.get(i..)?.join("/");
                    params.push(WILDCARD_PARAM, decode(&rest));
                    return Some(params);
                }
                Segment::Literal(literal) => {
                    if decode(path.get(i)?) != *literal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(i)?;
                    params.push(name.as_str(), decode(value));
                }
            }
        }

        (path.len() == self.segments.len()).then_some(params)
    }

    /// True if every path matched by `other` is also matched by `self`
    ///
    /// When `self` is declared first, `other` can never be selected.
    pub fn covers(&self, other: &Pattern) -> bool {
        let mut theirs = other.segments.iter();

        for ours in &self.segments {
            match (ours, theirs.next()) {
                (Segment::Wildcard, _) => return true,
                (_, None) | (_, Some(Segment::Wildcard)) => return false,
                (Segment::Param(_), Some(_)) => {}
                (Segment::Literal(a), Some(Segment::Literal(b))) if a == b => {}
                (Segment::Literal(_), Some(_)) => return false,
            }
        }

        theirs.next().is_none()
    }
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
