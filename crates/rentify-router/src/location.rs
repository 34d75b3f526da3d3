//! Navigation targets
//!
//! A [`Location`] is what the browser calls `location`: the pathname the
//! router matches against, plus the query and fragment that views may read.

use crate::{Error, Result};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Parsed navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    search: String,
    hash: String,
}

impl Location {
    /// Parse a slash-prefixed path such as `/reset-password?token=abc#top`
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "path is empty",
            });
        }
        if !path.starts_with('/') {
            return Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "path must start with `/`",
            });
        }

        let (rest, hash) = path.split_once('#').unwrap_or((path, ""));
        let (pathname, search) = rest.split_once('?').unwrap_or((rest, ""));

        Ok(Self {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        })
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string without the leading `?`
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Fragment without the leading `#`
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Non-empty pathname segments; `/items//42/` yields `["items", "42"]`
    pub fn segments(&self) -> SmallVec<[&str; 8]> {
        self.pathname.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Decoded query pairs in order of appearance
    pub fn query_pairs(&self) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
        url::form_urlencoded::parse(self.search.as_bytes())
    }

    /// First decoded value for `name` in the query string
    pub fn query(&self, name: &str) -> Option<String> {
        self.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// Full path as it would appear in the address bar
    pub fn href(&self) -> String {
        let mut href = self.pathname.clone();
        if !self.search.is_empty() {
            href.push('?');
            href.push_str(&self.search);
        }
        if !self.hash.is_empty() {
            href.push('#');
            href.push_str(&self.hash);
        }
        href
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
            hash: String::new(),
        }
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_parts() {
        let loc = Location::parse("/reset-password?token=abc%20def&x=1#form").unwrap();
        assert_eq!(loc.pathname(), "/reset-password");
        assert_eq!(loc.search(), "token=abc%20def&x=1");
        assert_eq!(loc.hash(), "form");
        assert_eq!(loc.query("token").as_deref(), Some("abc def"));
        assert_eq!(loc.query("x").as_deref(), Some("1"));
        assert_eq!(loc.query("missing"), None);
    }

    #[test]
    fn test_hash_before_query_mark() {
        // A `?` after `#` belongs to the fragment
        let loc = Location::parse("/likes#a?b").unwrap();
        assert_eq!(loc.pathname(), "/likes");
        assert_eq!(loc.search(), "");
        assert_eq!(loc.hash(), "a?b");
    }

    #[test]
    fn test_rejects_empty_and_relative() {
        assert!(matches!(
            Location::parse(""),
            Err(Error::InvalidPath { reason: "path is empty", .. })
        ));
        assert!(matches!(
            Location::parse("login"),
            Err(Error::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_segments_skip_empty() {
        let loc = Location::parse("/items//42/").unwrap();
        assert_eq!(loc.segments().as_slice(), &["items", "42"]);
        assert!(Location::parse("/").unwrap().segments().is_empty());
    }

    #[test]
    fn test_href_round_trip() {
        for raw in ["/", "/login", "/filter?q=bike", "/likes#top", "/a?b=c#d"] {
            let loc: Location = raw.parse().unwrap();
            assert_eq!(loc.href(), raw);
            assert_eq!(loc.to_string(), raw);
        }
    }

    #[test]
    fn test_default_is_root() {
        assert_eq!(Location::default(), Location::parse("/").unwrap());
    }
}
