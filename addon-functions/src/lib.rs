//! Code generation helpers for add-on functions
//!
//! An add-on function is invoked by the platform with a JSON event describing what
//! the user is looking at, and answers with `{ "eventResponse": ... }`, usually a
//! page of HTML that the platform renders into the add-on window.
//!
//! Write a plain function from an extracted event to something that implements
//! [IntoEventResponse], then hand it to [invoke!] to get a `main`.
//!
//! You are likely to be interested in the sibling crates:
//! * `addon-functions-host`: Interfaces and tools for the hosting platform.
//! * `addon-functions-log`: Standard `log` adapter.
mod event;
mod macros;
mod response;

pub mod encoding;
pub mod page;

pub use addon_functions_host::{Error, FunctionResult, InvocationContext};
pub use event::{AddonEvent, EventAuth, JobArgs};
pub use macros::function_event::{invoke_template, run};
pub use response::{EventResponse, IntoEventResponse};

/// Re-exported for the [invoke!] macro.
#[doc(hidden)]
pub use lambda_runtime;
