use crate::compat::{String, format};

/// Strip a single leading `?` from a search string, if present
pub fn strip_query_prefix(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}

/// Split a query segment on its first `=`.
/// Returns (`key`, `value`); value is `None` when the segment has no `=`.
pub fn split_pair(segment: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'=', segment.as_bytes()).map_or((segment, None), |pos| {
        (&segment[..pos], Some(&segment[pos + 1..]))
    })
}

/// Non-empty `&`-separated segments of a query string
pub fn segments(query: &str) -> impl Iterator<Item = &str> {
    query.split('&').filter(|segment| !segment.is_empty())
}

/// Split a relative URL into (`pathname`, `search`).
/// The search keeps its leading `?`; a fragment, if any, is dropped.
pub fn split_path_and_search(url: &str) -> (&str, &str) {
    let url = memchr::memchr(b'#', url.as_bytes()).map_or(url, |pos| &url[..pos]);
    memchr::memchr(b'?', url.as_bytes()).map_or((url, ""), |pos| (&url[..pos], &url[pos..]))
}

/// Prefix a bare query with `?`, keeping an empty query empty
pub fn to_search(query: &str) -> String {
    if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    }
}
