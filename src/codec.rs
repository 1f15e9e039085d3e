//! Conversion between raw query strings and [`QueryMap`].
//!
//! Values are never percent-decoded or percent-encoded here: the codec only
//! splits and joins, so whatever the address bar holds is written back as-is.

use crate::compat::String;
use crate::helpers::{segments, split_pair, strip_query_prefix};
use crate::query_map::{ParamValue, QueryMap};

/// Decode a query string into an ordered key-value mapping.
///
/// A leading `?` is ignored. Each `&`-separated segment is split on its first
/// `=`; a segment without `=` maps to [`ParamValue::Missing`]. Empty segments
/// are skipped and a repeated key keeps its first position with the last value.
/// Malformed input never fails, it simply decodes to whatever pairs it holds.
///
/// # Examples
///
/// ```
/// use urlsync::{ParamValue, decode};
///
/// let map = decode("?sort=asc&page=2&sale");
/// assert_eq!(map.get("sort"), Some(&ParamValue::from("asc")));
/// assert_eq!(map.get("sale"), Some(&ParamValue::Missing));
/// ```
pub fn decode(query: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for segment in segments(strip_query_prefix(query)) {
        let (key, value) = split_pair(segment);
        map.insert(key, ParamValue::from(value));
    }
    map
}

/// Encode a mapping into a query string without the leading `?`.
///
/// Entries with an empty key or an absent value (see
/// [`ParamValue::is_present`]) are left out.
///
/// # Examples
///
/// ```
/// use urlsync::{QueryMap, encode};
///
/// let map = QueryMap::from([("page", "3"), ("color", ""), ("sort", "asc")]);
/// assert_eq!(encode(&map), "page=3&sort=asc");
/// ```
pub fn encode(map: &QueryMap) -> String {
    let mut query = String::new();
    for (key, value) in map.iter() {
        if key.is_empty() || !value.is_present() {
            continue;
        }
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        value.write_into(&mut query);
    }
    query
}
