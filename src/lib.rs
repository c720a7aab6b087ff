//! Declarative, type-safe HTTP endpoint client.
//!
//! Describe an endpoint once (base URL, path segments, query items, verb,
//! headers, expected model) and [`Client`] turns it into a request,
//! dispatches it through an injectable [`Transport`], and decodes the body
//! into the declared model, reporting failures as [`ApiError`]. Paged list
//! endpoints walk their pages through [`PagedEndpoint`].

mod client;
pub mod datetime;
mod decode;
mod endpoint;
mod errors;
mod model;
mod paging;
mod request;
mod settings;
mod transport;

pub use self::client::Client;
pub use self::decode::{decode, DecodedResult};
pub use self::endpoint::Endpoint;
pub use self::errors::ApiError;
pub use self::model::ApiModel;
pub use self::paging::{PageLinks, PagedEndpoint, PagedEnvelope, ResponseMetadata};
pub use self::request::{ApiRequest, Method};
pub use self::settings::Settings;
pub use self::transport::{ReqwestTransport, Transport, TransportError};
