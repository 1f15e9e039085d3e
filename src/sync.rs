//! Keeping UI filter and sort state in the address bar.

use crate::codec::{decode, encode};
use crate::compat::{String, ToString, format};
use crate::encoding::percent_decode;
use crate::error::Result;
use crate::helpers::{strip_query_prefix, to_search};
use crate::navigation::NavigationContext;
use crate::params::query_param;
use crate::query_map::{ParamValue, QueryMap};
use crate::search_params::SearchParams;
use crate::types::RouteLocation;

fn push_pair(query: &mut String, key: &str, value: &ParamValue) {
    query.push_str(key);
    query.push('=');
    value.write_into(query);
}

/// Merge `updates` into the current search and push one history entry.
///
/// Updates are applied in order to a working copy of `history`'s search:
///
/// 1. an empty working copy is started with `key=value`;
/// 2. a key that `location` already carries is overwritten in place, and an
///    absent value removes it;
/// 3. any other key with a value is appended.
///
/// Step 2 checks `location`, the state before this call, not the working
/// copy. If `history` already holds a key that `location` lacks, step 3
/// appends it a second time.
///
/// Empty keys and absent values (see [`ParamValue::is_present`]) never start
/// or extend the query. A history entry is pushed even when nothing changed.
///
/// # Errors
///
/// Returns whatever the navigation context reports when it refuses the push.
///
/// # Examples
///
/// ```
/// use urlsync::{MemoryHistory, NavigationContext, QueryMap, RouteLocation, set_query_params};
///
/// let mut history = MemoryHistory::new("/men?page=1&sort=asc");
/// let location = RouteLocation::new("/men", "?page=1&sort=asc");
///
/// set_query_params(&QueryMap::from([("page", 3)]), &location, &mut history)?;
/// assert_eq!(history.search(), "?page=3&sort=asc");
/// # Ok::<(), urlsync::Error>(())
/// ```
pub fn set_query_params<N>(
    updates: &QueryMap,
    location: &RouteLocation,
    history: &mut N,
) -> Result<()>
where
    N: NavigationContext + ?Sized,
{
    let mut query = strip_query_prefix(history.search()).to_string();

    for (key, value) in updates.iter() {
        let key_and_value_exist = !key.is_empty() && value.is_present();

        if query.is_empty() && key_and_value_exist {
            tracing::trace!(key, "Starting query with parameter");
            push_pair(&mut query, key, value);
        } else if query_param(key, location).is_some() {
            tracing::trace!(key, "Updating existing parameter");
            let mut pairs = decode(&query);
            pairs.insert(key, value.clone());
            query = encode(&pairs);
        } else if key_and_value_exist {
            tracing::trace!(key, "Appending parameter");
            query.push('&');
            push_pair(&mut query, key, value);
        } else {
            tracing::trace!(key, "Skipping parameter without value");
        }
    }

    let search = to_search(&query);
    tracing::debug!(search = %search, "Committing query parameters");
    history.push(&search)
}

/// Drop every query parameter by pushing an empty search
///
/// # Errors
///
/// Returns whatever the navigation context reports when it refuses the push.
pub fn clear_queries_from_url<N>(history: &mut N) -> Result<()>
where
    N: NavigationContext + ?Sized,
{
    tracing::debug!("Clearing query parameters");
    history.push("")
}

/// Set `name=value` on the current location without adding a history entry.
///
/// The search is re-serialized form-urlencoded and the whole
/// `pathname?search` is then percent-decoded before being written back, so
/// encoded reserved characters come back out literally.
///
/// # Errors
///
/// Returns [`Error::InvalidPercentEncoding`](crate::Error::InvalidPercentEncoding)
/// if the decoded location is not valid UTF-8, or whatever the navigation
/// context reports when it refuses the replace.
pub fn update_query_param_without_history<N>(
    name: &str,
    value: impl core::fmt::Display,
    context: &mut N,
) -> Result<()>
where
    N: NavigationContext + ?Sized,
{
    let mut params = SearchParams::parse(context.search());
    params.set(name, &value.to_string());

    let url = percent_decode(&format!("{}?{}", context.pathname(), params))?;
    tracing::debug!(name, url = %url, "Replacing location without history entry");
    context.replace_silently(&url)
}
