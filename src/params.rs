use crate::compat::{String, ToString};
use crate::helpers::{segments, split_pair, strip_query_prefix};
use crate::types::{RouteLocation, RouteMatch};

/// Look up a query parameter in the location's search string.
///
/// Returns the raw (still percent-encoded) value of the first matching
/// segment. A bare `name` without `=` is found with an empty value, so
/// `Some("")` means present-but-empty and `None` means not present.
///
/// # Examples
///
/// ```
/// use urlsync::{RouteLocation, query_param};
///
/// let location = RouteLocation::new("/men", "?sort=asc&page=2");
/// assert_eq!(query_param("sort", &location), Some("asc"));
/// assert_eq!(query_param("missing", &location), None);
/// ```
pub fn query_param<'a>(name: &str, location: &'a RouteLocation) -> Option<&'a str> {
    segments(strip_query_prefix(&location.search))
        .map(split_pair)
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.unwrap_or(""))
}

/// Path segment matched by the active route.
///
/// The first occurrence of the route's path template is removed from the
/// pathname. Unless the template is the root `/`, the separator left at the
/// front is dropped as well.
///
/// # Examples
///
/// ```
/// use urlsync::{RouteLocation, RouteMatch, path_param};
///
/// let location = RouteLocation::new("/cms/about", "");
/// assert_eq!(path_param(&RouteMatch::new("/cms"), &location), "about");
/// ```
pub fn path_param(route: &RouteMatch, location: &RouteLocation) -> String {
    let stripped = location.pathname.replacen(&route.path, "", 1);
    if route.path == "/" {
        return stripped;
    }

    let mut chars = stripped.chars();
    chars.next();
    chars.as_str().to_string()
}
