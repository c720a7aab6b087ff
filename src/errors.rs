//! Error types for the endpoint client.

/// Errors that can occur when building, dispatching, or decoding a request.
///
/// This is the only error surface the crate exposes: transport and
/// deserialization failures are re-expressed as one of these kinds at the
/// client boundary, never passed through raw. The display strings are
/// fixed and match the service's historical wording.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// A required field or key was missing (or null) in the decoded payload.
    #[error("not found data")]
    NotFound,
    /// The endpoint could not produce a valid URL or request.
    #[error("url is error")]
    UrlError,
    /// The transport failed to deliver bytes, or an unclassified decode
    /// failure occurred (conservative fallback).
    #[error("networkUnavailable")]
    NetworkUnavailable,
    /// A field's JSON type did not match the declared model type.
    #[error("types not identical")]
    MismatchType,
    /// The payload bytes were structurally corrupt relative to the
    /// declared shape.
    #[error("decoding Error")]
    DecodingError,
}
