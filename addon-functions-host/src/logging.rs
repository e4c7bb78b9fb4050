//! Host interface for the console, where the platform collects function logs.
//!
//! Anything written to stdout or stderr by a function is captured by the
//! platform and shipped to its log store, one line per entry.

use std::io::Write;

/// Which console stream do you want your logs on?
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogDestination {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
}

/// Logs a given string as one line on the destination stream.
///
/// Write failures are dropped; there is nowhere left to report them.
pub fn log(input: &str, destination: LogDestination) {
    let _ = match destination {
        LogDestination::Stdout => writeln!(std::io::stdout().lock(), "{input}"),
        LogDestination::Stderr => writeln!(std::io::stderr().lock(), "{input}"),
    };
}
