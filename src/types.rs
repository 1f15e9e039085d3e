use crate::compat::{String, ToString};

/// Route that matched the current location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMatch {
    /// Path template of the route, e.g. `"/"` or `"/category"`
    pub path: String,
}

impl RouteMatch {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

/// Location as seen by the router
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteLocation {
    pub pathname: String,
    /// Search string including the leading `?`, or empty
    pub search: String,
}

impl RouteLocation {
    pub fn new(pathname: &str, search: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            search: search.to_string(),
        }
    }

    /// Build a location from a relative URL like `/men?page=2`
    pub fn from_url(url: &str) -> Self {
        let (pathname, search) = crate::helpers::split_path_and_search(url);
        Self::new(pathname, search)
    }
}
