#![deny(missing_docs)]

//! Host interface tools for add-on functions
//!
//! This crate holds the pieces of an add-on function that talk to the hosting
//! platform: invocation metadata, the runtime environment, the console sink that
//! logs end up in, and the error type every invocation reports failures with.
//!
//! Functions run on the AWS Lambda runtime API. The platform invokes them with a
//! JSON event and expects a JSON reply.
//!
//! You are likely to be interested in the sibling crates:
//! * `addon-functions`: Payload encoding, responses and the `invoke!` entrypoint.
//! * `addon-functions-log`: Standard `log` adapter.

mod context;
pub mod environment;
mod error;
pub mod logging;

pub use context::InvocationContext;
pub use error::{Error, FunctionResult};
