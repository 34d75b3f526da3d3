//! Bound path parameters

use smallvec::SmallVec;
use std::collections::HashMap;

/// Name under which a bare `*` binds the rest of the path
pub const WILDCARD_PARAM: &str = "*";

/// Captured path parameters as (name, value) pairs, in pattern order
///
/// Most patterns bind zero or one parameter, so the pairs live inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: SmallVec<[(String, String); 2]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Value bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remainder captured by a trailing `*`
    pub fn wildcard(&self) -> Option<&str> {
        self.get(WILDCARD_PARAM)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Get params as HashMap for convenient access
    pub fn to_map(&self) -> HashMap<String, String> {
        self.pairs.iter().cloned().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_order() {
        let params: Params = [("category", "5"), ("id", "42")].into_iter().collect();

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("category"), Some("5"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("category", "5"), ("id", "42")]
        );
    }

    #[test]
    fn test_wildcard_lookup() {
        let params: Params = [(WILDCARD_PARAM, "a/b")].into_iter().collect();
        assert_eq!(params.wildcard(), Some("a/b"));
    }

    #[test]
    fn test_to_map() {
        let params: Params = [("id", "42")].into_iter().collect();
        let map = params.to_map();
        assert_eq!(map.get("id"), Some(&"42".to_string()));
        assert_eq!(params.len(), 1);
        assert!(!params.is_empty());
        assert!(Params::new().is_empty());
    }
}
