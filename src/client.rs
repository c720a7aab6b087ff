//! The fetch client: one pipeline, two entry points.

use std::sync::Arc;

use crate::decode::{self, DecodedResult};
use crate::endpoint::Endpoint;
use crate::errors::ApiError;
use crate::settings::Settings;
use crate::transport::{ReqwestTransport, Transport};

/// Dispatches endpoint descriptors: builds the request, runs it through
/// the transport, and decodes the body into the endpoint's model.
///
/// The response type is fixed by the endpoint's [`Model`] associated type,
/// so requesting the wrong model is a compile error rather than a runtime
/// failure. Concurrent fetches are independent; nothing is serialized
/// inside the client, and a fetch once dispatched runs to completion or
/// transport failure.
///
/// [`Model`]: Endpoint::Model
#[derive(Clone)]
pub struct Client {
    settings: Arc<Settings>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client over the reqwest transport.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self::with_transport(settings, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client over a custom transport. Used to inject test doubles.
    pub fn with_transport(settings: Arc<Settings>, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings,
            transport,
        }
    }

    /// Fetches the endpoint and decodes the response into its model.
    ///
    /// Fails with [`ApiError::UrlError`] when the endpoint cannot produce
    /// a request (the transport is never invoked), with
    /// [`ApiError::NetworkUnavailable`] when the transport fails, and with
    /// the decoder's classification otherwise. The only suspension point
    /// is the transport call itself.
    pub async fn fetch<E>(&self, endpoint: &E) -> Result<DecodedResult<E::Model>, ApiError>
    where
        E: Endpoint,
    {
        let request = match endpoint.build_request(&self.settings) {
            Some(request) => request,
            None => {
                tracing::error!("endpoint could not produce a request URL");
                return Err(ApiError::UrlError);
            }
        };
        let url = request.url.clone();
        let bytes = self.transport.execute(&request).await.map_err(|e| {
            tracing::error!("transport failed for {}: {}", url, e);
            ApiError::NetworkUnavailable
        })?;
        tracing::debug!("received {} bytes from {}", bytes.len(), url);
        decode::decode(&bytes, url)
    }

    /// Callback form of [`fetch`](Client::fetch): spawns the same pipeline
    /// onto the ambient tokio runtime and hands the outcome to
    /// `on_complete`.
    ///
    /// Never blocks the caller. The callback runs on whatever task the
    /// runtime completes the fetch on, not necessarily the calling
    /// context. Must be called from within a tokio runtime.
    pub fn fetch_with<E, F>(&self, endpoint: E, on_complete: F)
    where
        E: Endpoint + Send + Sync + 'static,
        E::Model: Send + 'static,
        F: FnOnce(Result<DecodedResult<E::Model>, ApiError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            on_complete(client.fetch(&endpoint).await);
        });
    }
}
