use addon_functions_host::{Error, FunctionResult};
use serde::Serialize;

use crate::encoding::Json;

/// Values returned by a function implemented with the [crate::invoke!] macro must implement this trait.
///
/// Implementations are provided for
/// - [EventResponse]: the reply itself
/// - [String] and [&str]: an `eventResponse` holding the string, usually HTML
/// - [()]: an empty reply, for events the function ignores
/// - [Json]: an `eventResponse` holding the pretty-printed JSON
/// - `Result<impl IntoEventResponse, E>`: errors fail the invocation
pub trait IntoEventResponse {
    fn into_event_response(self) -> FunctionResult<EventResponse>;
}

/// The reply to an add-on event.
///
/// Serializes as `{"eventResponse": "..."}`, or `{}` when there is nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventResponse {
    #[serde(rename = "eventResponse", skip_serializing_if = "Option::is_none")]
    event_response: Option<String>,
}

impl EventResponse {
    /// A reply the platform renders into the add-on window.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            event_response: Some(body.into()),
        }
    }

    /// A reply with nothing to render.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The body, if there is one.
    pub fn body(&self) -> Option<&str> {
        self.event_response.as_deref()
    }

    pub fn into_body(self) -> Option<String> {
        self.event_response
    }
}

impl IntoEventResponse for EventResponse {
    fn into_event_response(self) -> FunctionResult<EventResponse> {
        Ok(self)
    }
}

impl IntoEventResponse for String {
    fn into_event_response(self) -> FunctionResult<EventResponse> {
        Ok(EventResponse::new(self))
    }
}

impl IntoEventResponse for &str {
    fn into_event_response(self) -> FunctionResult<EventResponse> {
        Ok(EventResponse::new(self))
    }
}

impl IntoEventResponse for () {
    fn into_event_response(self) -> FunctionResult<EventResponse> {
        Ok(EventResponse::empty())
    }
}

impl<T: Serialize> IntoEventResponse for Json<T> {
    fn into_event_response(self) -> FunctionResult<EventResponse> {
        serde_json::to_string_pretty(&self.0)
            .map(EventResponse::new)
            .map_err(Error::Encode)
    }
}

impl<R, E> IntoEventResponse for Result<R, E>
where
    R: IntoEventResponse,
    E: Into<Error>,
{
    fn into_event_response(self) -> FunctionResult<EventResponse> {
        self.map_err(Into::into)?.into_event_response()
    }
}
