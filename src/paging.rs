//! Pagination: envelope metadata and the page cursor.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::endpoint::Endpoint;
use crate::model::ApiModel;
use crate::settings::Settings;

/// Pagination metadata decoded from a paged list response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub current_page: i64,
    pub from: Option<i64>,
    pub last_page: i64,
    pub per_page: Option<i64>,
    pub to: Option<i64>,
    pub total: i64,
}

/// Navigation links some paged envelopes carry alongside the metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// A paged list response: the items plus the pagination envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PagedEnvelope<T> {
    pub data: Vec<T>,
    pub links: Option<PageLinks>,
    pub meta: ResponseMetadata,
}

impl<T: serde::de::DeserializeOwned> ApiModel for PagedEnvelope<T> {}

/// An endpoint that walks a list through a page counter.
///
/// The cursor state is the stored page number. It belongs to whoever holds
/// the endpoint value and is mutated in place; sharing one across
/// concurrent pagination walks needs external synchronization.
pub trait PagedEndpoint: Endpoint {
    fn page(&self) -> Option<i64>;

    fn set_page(&mut self, page: i64);

    /// Advances the cursor and rebuilds the URL for the next page.
    ///
    /// Returns `None` once `meta.current_page + 1 > meta.last_page`
    /// (pagination exhausted), leaving the stored page unchanged. How the
    /// page number maps into the URL is the endpoint's own business via
    /// its [`query_items`](Endpoint::query_items).
    fn next_page_url(&mut self, meta: &ResponseMetadata, settings: &Settings) -> Option<Url> {
        let next_page = meta.current_page + 1;
        if next_page > meta.last_page {
            return None;
        }
        self.set_page(next_page);
        self.build_url(settings)
    }
}
