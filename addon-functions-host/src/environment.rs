//! Process-wide details about the running function.
//!
//! The platform publishes these through environment variables. They do not
//! change for the lifetime of the process, so they are read once.

use std::{env, str::FromStr, sync::LazyLock};

use log::LevelFilter;

static NOT_FOUND: &str = "<not found>";

static GET_ENVIRONMENT_ONCE: LazyLock<FunctionEnvironment> =
    LazyLock::new(|| FunctionEnvironment::from_lookup(|key| env::var(key).ok()));

/// Variable holding the name of the function.
pub const FUNCTION_NAME_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";
/// Variable holding the region the function runs in.
pub const REGION_VAR: &str = "AWS_REGION";
/// Variable holding the memory the function was given, in megabytes.
pub const MEMORY_SIZE_VAR: &str = "AWS_LAMBDA_FUNCTION_MEMORY_SIZE";
/// Variable selecting the log level, e.g. `debug`. Defaults to `info`.
pub const LOG_LEVEL_VAR: &str = "ADDON_LOG_LEVEL";

/// Easy-to-access information about the function's environment.
///
/// ```rust,no_run
/// use addon_functions_host::environment::FunctionEnvironment;
/// let environment = FunctionEnvironment::get_function_environment();
///
/// log::info!("Function: {} in {}", environment.function_name(), environment.region());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEnvironment {
    function_name: String,
    region: String,
    memory_size_mb: Option<u32>,
    log_level: LevelFilter,
}

impl FunctionEnvironment {
    /// Returns a singleton describing the current process. This is safe to call
    /// multiple times.
    pub fn get_function_environment() -> &'static FunctionEnvironment {
        &GET_ENVIRONMENT_ONCE
    }

    /// Builds an environment from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let function_name = lookup(FUNCTION_NAME_VAR).unwrap_or(NOT_FOUND.to_string());
        let region = lookup(REGION_VAR).unwrap_or(NOT_FOUND.to_string());
        let memory_size_mb = lookup(MEMORY_SIZE_VAR).and_then(|v| v.trim().parse().ok());
        let log_level = lookup(LOG_LEVEL_VAR)
            .and_then(|v| LevelFilter::from_str(v.trim()).ok())
            .unwrap_or(LevelFilter::Info);
        Self {
            function_name,
            region,
            memory_size_mb,
            log_level,
        }
    }

    /// The name of the function, or `<not found>` outside the platform.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// The region the function runs in, or `<not found>` outside the platform.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The memory the function was given, if the platform said.
    pub fn memory_size_mb(&self) -> Option<u32> {
        self.memory_size_mb
    }

    /// The level logs should be filtered at.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
