use crate::compat::{String, ToString, Vec};

/// Value of a single query parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    /// Plain text value, kept exactly as written (no percent-decoding)
    Text(String),
    /// Flat list of values, serialized comma-separated
    List(Vec<String>),
    /// A segment that had no `=` at all
    #[default]
    Missing,
}

impl ParamValue {
    /// Whether the value would be written to a query string.
    /// Empty text, an empty list and `Missing` are all absent; `"0"` is present.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Missing => false,
        }
    }

    /// Append the serialized value to `buffer`
    pub(crate) fn write_into(&self, buffer: &mut String) {
        match self {
            Self::Text(text) => buffer.push_str(text),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        buffer.push(',');
                    }
                    buffer.push_str(item);
                }
            }
            Self::Missing => {}
        }
    }

    /// The value as text, if it is a single text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(items: &[&str]) -> Self {
        Self::List(items.iter().map(|item| (*item).to_string()).collect())
    }
}

impl From<Option<&str>> for ParamValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, Self::from)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(n: $t) -> Self {
                    Self::Text(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Ordered mapping of query parameter names to values.
/// Keys are unique; insertion order is kept so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, ParamValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value. An existing key keeps its position and gets the new value.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) -> Option<ParamValue> {
        let value = value.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((key.to_string(), value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value);
        }
        map
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>, const N: usize> From<[(K, V); N]> for QueryMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl core::fmt::Display for QueryMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::codec::encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::vec;

    #[test]
    fn test_insert_keeps_position() {
        let mut map = QueryMap::new();
        map.insert("page", "1");
        map.insert("sort", "asc");
        let previous = map.insert("page", "2");

        assert_eq!(previous, Some(ParamValue::from("1")));
        assert_eq!(map.len(), 2);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["page", "sort"]);
        assert_eq!(map.get("page"), Some(&ParamValue::from("2")));
    }

    #[test]
    fn test_remove() {
        let mut map = QueryMap::from([("a", "1"), ("b", "2")]);
        assert_eq!(map.remove("a"), Some(ParamValue::from("1")));
        assert_eq!(map.remove("a"), None);
        assert!(!map.contains_key("a"));
        assert!(map.contains_key("b"));
    }

    #[test]
    fn test_presence() {
        assert!(ParamValue::from("0").is_present());
        assert!(ParamValue::from(0u32).is_present());
        assert!(!ParamValue::from("").is_present());
        assert!(!ParamValue::List(Vec::new()).is_present());
        assert!(!ParamValue::Missing.is_present());
        assert!(ParamValue::from(&["red"][..]).is_present());
    }

    #[test]
    fn test_list_write() {
        let mut buffer = String::new();
        ParamValue::from(&["red", "blue"][..]).write_into(&mut buffer);
        assert_eq!(buffer, "red,blue");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ParamValue::from(None::<&str>), ParamValue::Missing);
        assert_eq!(ParamValue::from(Some("x")).as_text(), Some("x"));
    }
}
