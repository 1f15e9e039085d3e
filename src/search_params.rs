use crate::compat::{String, ToString, Vec};
use crate::encoding::{form_decode, form_encode_into};
use crate::helpers::{segments, split_pair, strip_query_prefix};

/// Ordered, form-urlencoded parameter set with `URLSearchParams` semantics.
///
/// Unlike [`QueryMap`](crate::QueryMap), names and values are decoded on
/// parse and encoded on serialization, and a name may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let params = segments(strip_query_prefix(query))
            .map(|segment| {
                let (name, value) = split_pair(segment);
                (form_decode(name), value.map(form_decode).unwrap_or_default())
            })
            .collect();

        Self { params }
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.params.push((name.to_string(), value.to_string()));
    }

    /// Delete every pair with the given name
    pub fn delete(&mut self, name: &str) {
        self.params.retain(|(n, _)| n != name);
    }

    /// Get the first value for a name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.params.iter().any(|(n, _)| n == name)
    }

    /// Set the first pair named `name` to `value` and drop any later ones.
    /// Appends a new pair if the name is absent.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut found = false;
        self.params.retain_mut(|(n, v)| {
            if n != name {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *v = value.to_string();
            true
        });
        if !found {
            self.append(name, value);
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Serializes without the leading `?`
impl core::fmt::Display for SearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = String::new();
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            form_encode_into(&mut buffer, name);
            buffer.push('=');
            form_encode_into(&mut buffer, value);
        }
        f.write_str(&buffer)
    }
}

impl From<&str> for SearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::vec;

    #[test]
    fn test_parse() {
        let params = SearchParams::parse("?q=red+shoes&size=42&sale");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("q"), Some("red shoes"));
        assert_eq!(params.get("size"), Some("42"));
        assert_eq!(params.get("sale"), Some(""));
        assert_eq!(params.get("color"), None);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let params = SearchParams::parse("color=red&color=blue");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("color"), Some("red"));
    }

    #[test]
    fn test_set_replaces_first_and_drops_rest() {
        let mut params = SearchParams::parse("color=red&page=1&color=blue");
        params.set("color", "green");
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(pairs, vec![("color", "green"), ("page", "1")]);
    }

    #[test]
    fn test_set_appends_missing() {
        let mut params = SearchParams::parse("page=1");
        params.set("sort", "asc");
        assert_eq!(params.to_string(), "page=1&sort=asc");
    }

    #[test]
    fn test_delete() {
        let mut params = SearchParams::parse("a=1&b=2&a=3");
        params.delete("a");
        assert!(!params.has("a"));
        assert!(params.has("b"));
    }

    #[test]
    fn test_display_encodes() {
        let mut params = SearchParams::new();
        params.append("q", "red shoes & socks");
        params.append("price", "10+20");
        assert_eq!(params.to_string(), "q=red+shoes+%26+socks&price=10%2B20");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(SearchParams::new().to_string(), "");
    }
}
