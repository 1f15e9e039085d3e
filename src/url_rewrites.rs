//! Binding between the URL rewrite store, its dispatcher and the page
//! component that renders whatever entity a path resolves to.

use crate::compat::String;
use crate::params::path_param;
use crate::types::{RouteLocation, RouteMatch};

/// Request to resolve a path into a page entity
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteRequest {
    /// Path relative to the matched route, e.g. `"men/shirts.html"`
    pub url_param: String,
}

impl RewriteRequest {
    /// Build the request for the path the active route matched
    pub fn for_route(route: &RouteMatch, location: &RouteLocation) -> Self {
        Self {
            url_param: path_param(route, location),
        }
    }
}

/// State holding the most recently resolved rewrite
pub trait RewriteStore {
    type Rewrite;

    fn url_rewrite(&self) -> Option<&Self::Rewrite>;
}

/// Fire-and-forget operations that fetch or reset rewrites
pub trait RewriteDispatcher {
    fn handle_data(&mut self, request: RewriteRequest);

    fn clear_url_rewrites(&mut self);
}

/// Props handed to the URL rewrite page component
pub struct UrlRewritesContainer<S, D> {
    store: S,
    dispatcher: D,
}

impl<S, D> UrlRewritesContainer<S, D>
where
    S: RewriteStore,
    D: RewriteDispatcher,
{
    pub fn new(store: S, dispatcher: D) -> Self {
        Self { store, dispatcher }
    }

    pub fn url_rewrite(&self) -> Option<&S::Rewrite> {
        self.store.url_rewrite()
    }

    pub fn request_url_rewrite(&mut self, request: RewriteRequest) {
        tracing::debug!(url_param = %request.url_param, "Requesting URL rewrite");
        self.dispatcher.handle_data(request);
    }

    /// Request the rewrite for the path the active route matched
    pub fn request_for_route(&mut self, route: &RouteMatch, location: &RouteLocation) {
        self.request_url_rewrite(RewriteRequest::for_route(route, location));
    }

    pub fn clear_url_rewrites(&mut self) {
        tracing::debug!("Clearing URL rewrites");
        self.dispatcher.clear_url_rewrites();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn into_parts(self) -> (S, D) {
        (self.store, self.dispatcher)
    }
}
