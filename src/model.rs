//! Response model trait.

use serde::de::DeserializeOwned;

/// Implemented by every type an [`Endpoint`](crate::Endpoint) can declare
/// as its response model.
///
/// `id` is a generic numeric identity for models that carry one; the
/// default of 0 means "no identity".
pub trait ApiModel: DeserializeOwned {
    fn id(&self) -> i64 {
        0
    }
}
