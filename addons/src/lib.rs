//! Add-on functions for the job card.
//!
//! Each module is one function, deployed as its own binary:
//! * [hello_world]: greets the user with the job they have open.
//! * [app_actions]: the same greeting, shaped for an app action button.

use addon_functions_host::environment::FunctionEnvironment;
use addon_functions_log::{LogConfigError, LogMode};

pub mod app_actions;
pub mod hello_world;

/// Installs the console logger at the level configured for this function.
pub fn configure_logging() -> Result<(), LogConfigError> {
    let environment = FunctionEnvironment::get_function_environment();
    addon_functions_log::configure_logging(environment.log_level(), LogMode::Stdout)?;
    log::debug!(
        "Configured logging for {} in {}",
        environment.function_name(),
        environment.region()
    );
    Ok(())
}
