#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod encoding;
mod helpers;

mod codec;
mod error;
mod navigation;
mod params;
mod query_map;
mod search_params;
mod sync;
mod types;
mod url_rewrites;

// Public API
pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use navigation::{MemoryHistory, NavigationContext};
pub use params::{path_param, query_param};
pub use query_map::{ParamValue, QueryMap};
pub use search_params::SearchParams;
pub use sync::{clear_queries_from_url, set_query_params, update_query_param_without_history};
pub use types::{RouteLocation, RouteMatch};
pub use url_rewrites::{RewriteDispatcher, RewriteRequest, RewriteStore, UrlRewritesContainer};
