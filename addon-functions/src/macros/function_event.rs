use addon_functions_host::{Error, FunctionResult, InvocationContext};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;

use crate::IntoEventResponse;
use crate::encoding::Extract;

/// Create a `main` that serves add-on events with the given handler.
///
/// The handler receives its extracted input and the [InvocationContext]. The input can be
/// an [crate::AddonEvent], any [crate::encoding::Json]-wrapped type, or the raw
/// [serde_json::Value]. If the event cannot be extracted into the requested type, the
/// invocation fails with [Error::Extract] and the handler is never called.
///
/// The handler must return a value which implements [IntoEventResponse].
///
/// An optional second argument names a setup function run once at cold start, before the
/// first event is accepted. It must return a `Result` whose error can be boxed.
///
/// ```rust,no_run
/// use addon_functions::{AddonEvent, InvocationContext, JobArgs};
///
/// addon_functions::invoke!(greet);
/// fn greet(event: AddonEvent<JobArgs>, _context: &InvocationContext) -> String {
///     format!("<p>You have opened job <b>{}</b></p>", event.event_args.job_uuid)
/// }
/// ```
#[macro_export]
macro_rules! invoke {
    ($handler: path) => {
        fn main() -> ::std::result::Result<(), $crate::lambda_runtime::Error> {
            $crate::run($handler)
        }
    };
    ($handler: path, $setup: path) => {
        fn main() -> ::std::result::Result<(), $crate::lambda_runtime::Error> {
            $setup()?;
            $crate::run($handler)
        }
    };
}

/// Runs one invocation: extract, handle, encode.
///
/// On failure nothing is rendered. The error is logged and handed back so the platform
/// reports the invocation as failed.
pub fn invoke_template<TExtract, TResponse>(
    payload: Value,
    context: &InvocationContext,
    handler: fn(request: TExtract, context: &InvocationContext) -> TResponse,
) -> FunctionResult<Value>
where
    TExtract: Extract,
    TResponse: IntoEventResponse,
{
    log::debug!("Received invocation {}", context.request_id());
    let result = TExtract::extract(payload)
        .and_then(|request| handler(request, context).into_event_response())
        .and_then(|response| serde_json::to_value(response).map_err(Error::Encode));
    if let Err(error) = &result {
        log::error!("Function failed: {error}");
    }
    result
}

/// Serves events with `handler` until the platform shuts the process down.
///
/// Used by [crate::invoke!]; call it directly if you need your own `main`.
pub fn run<TExtract, TResponse>(
    handler: fn(request: TExtract, context: &InvocationContext) -> TResponse,
) -> Result<(), lambda_runtime::Error>
where
    TExtract: Extract + 'static,
    TResponse: IntoEventResponse + 'static,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(lambda_runtime::run(service_fn(
        move |event: LambdaEvent<Value>| async move {
            let context = InvocationContext::from(&event.context);
            invoke_template(event.payload, &context, handler).map_err(lambda_runtime::Error::from)
        },
    )))
}
