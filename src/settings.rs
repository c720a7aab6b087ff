//! Process-wide client configuration: base URL, bearer token, default headers.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use url::Url;

/// Shared configuration read on every request build.
///
/// Intended lifecycle: construct once at startup, share as `Arc<Settings>`,
/// mutate through [`configure`](Settings::configure) and the one-field
/// setters, then treat as read-only in steady state. Reads take the shared
/// lock only; there is no atomicity guarantee between a `configure` call
/// and concurrent request builds (last write wins).
#[derive(Debug, Default)]
pub struct Settings {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    base_url: Option<Url>,
    bearer_token: Option<String>,
    headers: Option<HashMap<String, String>>,
}

impl Settings {
    /// Creates an empty settings object: no base URL, no token, no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fields for which an argument is present; absent
    /// arguments leave the current value unchanged.
    ///
    /// The base URL is parsed here: an unparseable string stores the base
    /// URL as absent, which later surfaces as
    /// [`ApiError::UrlError`](crate::ApiError::UrlError) at fetch time.
    pub fn configure(
        &self,
        base_url: Option<&str>,
        bearer_token: Option<String>,
        headers: Option<HashMap<String, String>>,
    ) {
        let mut inner = self.write();
        if let Some(raw) = base_url {
            inner.base_url = Url::parse(raw).ok();
        }
        if let Some(token) = bearer_token {
            inner.bearer_token = Some(token);
        }
        if let Some(headers) = headers {
            inner.headers = Some(headers);
        }
    }

    /// Replaces the bearer token.
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        self.write().bearer_token = Some(token.into());
    }

    /// Replaces the default header map.
    pub fn set_headers(&self, headers: HashMap<String, String>) {
        self.write().headers = Some(headers);
    }

    /// The configured base URL, if any.
    pub fn base_url(&self) -> Option<Url> {
        self.read().base_url.clone()
    }

    /// The configured bearer token, if any.
    pub fn bearer_token(&self) -> Option<String> {
        self.read().bearer_token.clone()
    }

    /// The configured default headers, if any.
    pub fn headers(&self) -> Option<HashMap<String, String>> {
        self.read().headers.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
