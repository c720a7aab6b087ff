//! Endpoint descriptors and request building.

use std::collections::HashMap;

use url::Url;

use crate::model::ApiModel;
use crate::request::{ApiRequest, Method};
use crate::settings::Settings;

/// A declarative description of one endpoint call.
///
/// Implementors supply the URL pieces and the expected response model; the
/// provided methods turn the description into a concrete URL and request.
/// Base URL, bearer token, and headers default to whatever the shared
/// [`Settings`] holds at build time.
pub trait Endpoint {
    /// The typed response this endpoint decodes to.
    type Model: ApiModel;

    /// Path segments appended, in order, after the base URL's path.
    ///
    /// Each segment is one opaque path element: a `/` inside a segment is
    /// percent-encoded, never treated as a separator.
    fn path_segments(&self) -> Vec<String>;

    /// Query parameters, attached in the order returned.
    fn query_items(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn method(&self) -> Method {
        Method::default()
    }

    fn base_url(&self, settings: &Settings) -> Option<Url> {
        settings.base_url()
    }

    fn bearer_token(&self, settings: &Settings) -> Option<String> {
        settings.bearer_token()
    }

    fn headers(&self, settings: &Settings) -> Option<HashMap<String, String>> {
        settings.headers()
    }

    /// Builds the request URL, or `None` when no base URL is available.
    ///
    /// The result keeps the base URL's scheme, host, port, and fragment;
    /// its path is the base path followed by [`path_segments`] in order;
    /// any query on the base URL is replaced by [`query_items`].
    ///
    /// [`path_segments`]: Endpoint::path_segments
    /// [`query_items`]: Endpoint::query_items
    fn build_url(&self, settings: &Settings) -> Option<Url> {
        let mut url = self.base_url(settings)?;
        {
            let mut path = url.path_segments_mut().ok()?;
            path.pop_if_empty();
            for segment in self.path_segments() {
                path.push(&segment);
            }
        }
        url.set_query(None);
        for (name, value) in self.query_items() {
            url.query_pairs_mut().append_pair(&name, &value);
        }
        Some(url)
    }

    /// Builds the full request; `None` exactly when [`build_url`] is.
    ///
    /// A bearer token becomes `Authorization: bearer <token>` (the
    /// lowercase scheme literal is what the service expects). Endpoint
    /// headers are applied afterwards and override it on a
    /// case-insensitive name collision.
    ///
    /// [`build_url`]: Endpoint::build_url
    fn build_request(&self, settings: &Settings) -> Option<ApiRequest> {
        let url = self.build_url(settings)?;
        let mut headers: Vec<(String, String)> = Vec::new();
        if let Some(token) = self.bearer_token(settings) {
            headers.push(("Authorization".to_string(), format!("bearer {}", token)));
        }
        if let Some(custom) = self.headers(settings) {
            for (name, value) in custom {
                match headers
                    .iter_mut()
                    .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
                {
                    Some(entry) => entry.1 = value,
                    None => headers.push((name, value)),
                }
            }
        }
        Some(ApiRequest {
            url,
            method: self.method(),
            headers,
        })
    }
}
