//! Decoding of response bytes into typed models.

use serde_json::error::Category;
use url::Url;

use crate::errors::ApiError;
use crate::model::ApiModel;

/// A successfully decoded response: the model and the URL that produced it.
#[derive(Clone, Debug)]
pub struct DecodedResult<T> {
    pub model: T,
    pub source_url: Url,
}

/// Decodes `bytes` into `T`, classifying any failure onto [`ApiError`].
///
/// Classification, first match wins: a missing required key or a null
/// where a value is required is [`ApiError::NotFound`]; a JSON type that
/// does not match the model is [`ApiError::MismatchType`]; structurally
/// corrupt bytes (including a date field not in the fixed pattern) are
/// [`ApiError::DecodingError`]; anything else falls back to
/// [`ApiError::NetworkUnavailable`].
pub fn decode<T: ApiModel>(bytes: &[u8], source_url: Url) -> Result<DecodedResult<T>, ApiError> {
    match serde_json::from_slice::<T>(bytes) {
        Ok(model) => Ok(DecodedResult { model, source_url }),
        Err(e) => {
            let snippet = truncate_body(&String::from_utf8_lossy(bytes));
            tracing::error!(
                "failed to decode response from {}: {} | body: {}",
                source_url,
                e,
                snippet
            );
            Err(classify(&e))
        }
    }
}

fn classify(err: &serde_json::Error) -> ApiError {
    match err.classify() {
        Category::Syntax | Category::Eof => ApiError::DecodingError,
        Category::Data => {
            let msg = err.to_string();
            if msg.starts_with("missing field") || msg.starts_with("invalid type: null") {
                ApiError::NotFound
            } else if msg.starts_with("invalid date") {
                // date text outside the fixed pattern counts as corrupt data
                ApiError::DecodingError
            } else if msg.starts_with("invalid type")
                || msg.starts_with("invalid value")
                || msg.starts_with("invalid length")
            {
                ApiError::MismatchType
            } else {
                // unclassified decode failures keep the historical mapping
                ApiError::NetworkUnavailable
            }
        }
        Category::Io => ApiError::NetworkUnavailable,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
