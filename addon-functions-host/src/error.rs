//! Common host interface types

/// An alias for Result<T, Error> for convenience.
pub type FunctionResult<T> = std::result::Result<T, Error>;

/// An error during the execution of a Function.
///
/// Every variant is reported to the platform as a failed invocation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The event payload did not have the shape the handler asked for,
    /// e.g. a required key such as `eventArgs.jobUUID` was missing.
    #[error("failed to extract event: {0}")]
    Extract(#[source] serde_json::Error),

    /// The handler's reply could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    /// A catch-all error with a message.
    #[error("{0}")]
    MessageError(String),
}

impl Error {
    /// Creates a catch-all error from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::MessageError(message.into())
    }
}
