//! Decoding of event payloads

use addon_functions_host::{Error, FunctionResult};
use serde_json::Value;

/// Payload extractor for encodings
pub trait Extract: Sized {
    /// Convert from a payload to a value
    fn extract(payload: Value) -> FunctionResult<Self>;
}

impl Extract for Value {
    fn extract(payload: Value) -> FunctionResult<Self> {
        Ok(payload)
    }
}

/// JSON encoding and decoding
///
/// As a handler input, extracts any deserializable type from the event.
/// As a handler output, becomes an `eventResponse` holding the pretty-printed JSON.
pub struct Json<T>(pub T);
impl<T: serde::de::DeserializeOwned> Extract for Json<T> {
    fn extract(payload: Value) -> FunctionResult<Self> {
        serde_json::from_value(payload)
            .map(Json)
            .map_err(Error::Extract)
    }
}
