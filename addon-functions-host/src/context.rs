/// Metadata the platform hands to every invocation alongside the event.
///
/// Handlers receive it by reference. Nothing in it is needed to render a
/// response; it is there for log correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    request_id: String,
    deadline_ms: u64,
    invoked_function_arn: String,
    function_name: String,
}

impl InvocationContext {
    /// Creates a context for the given request id, with no deadline or function details.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            ..Default::default()
        }
    }

    /// Sets the invocation deadline, in milliseconds since the unix epoch.
    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = deadline_ms;
        self
    }

    /// Sets the ARN the function was invoked through.
    pub fn with_invoked_function_arn(mut self, arn: impl Into<String>) -> Self {
        self.invoked_function_arn = arn.into();
        self
    }

    /// Sets the name of the function being invoked.
    pub fn with_function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = function_name.into();
        self
    }

    /// The platform's id for this invocation.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// When the platform will give up on this invocation, in milliseconds since the unix epoch.
    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    /// The ARN the function was invoked through.
    pub fn invoked_function_arn(&self) -> &str {
        &self.invoked_function_arn
    }

    /// The name of the function being invoked.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }
}

impl From<&lambda_runtime::Context> for InvocationContext {
    fn from(context: &lambda_runtime::Context) -> Self {
        Self {
            request_id: context.request_id.clone(),
            deadline_ms: context.deadline,
            invoked_function_arn: context.invoked_function_arn.clone(),
            function_name: context.env_config.function_name.clone(),
        }
    }
}
