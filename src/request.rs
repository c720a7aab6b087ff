//! Transport-independent request values.

use url::Url;

/// HTTP methods an endpoint may declare. GET is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// The uppercase wire form of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully built request, ready to hand to a [`Transport`](crate::Transport).
///
/// Headers are an ordered list with unique (case-insensitive) names;
/// transports apply them in order.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
}
