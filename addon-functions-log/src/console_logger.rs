use std::fmt::Write;

use addon_functions_host::logging::LogDestination;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, set_boxed_logger, set_max_level};
use time::format_description::well_known::Rfc3339;

pub struct ConsoleLog {
    level: LevelFilter,
    destination: LogDestination,
}

impl ConsoleLog {
    pub fn init(log_level: LevelFilter, destination: LogDestination) -> Result<(), SetLoggerError> {
        set_boxed_logger(Box::new(ConsoleLog {
            level: log_level,
            destination,
        }))?;
        set_max_level(log_level);
        Ok(())
    }
}

impl Log for ConsoleLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let utc_now = time::OffsetDateTime::now_utc();
            let timestamp = utc_now.format(&Rfc3339).unwrap_or("<unknown>".to_string());
            addon_functions_host::logging::log(&format_line(record, &timestamp), self.destination);
        }
    }

    fn flush(&self) {}
}

fn format_line(record: &Record<'_>, timestamp: &str) -> String {
    let mut buffer = String::with_capacity(128);
    let level = record.level().as_str();
    let module = record.module_path().unwrap_or("<unknown>");
    let file = record.file().unwrap_or("<unknown>");
    let line = record.line().unwrap_or(0);
    let log_message = record.args();

    let _ = write!(
        &mut buffer,
        "{level} {timestamp} {module} {file}:{line} {log_message}"
    );
    buffer
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn line_carries_level_time_and_location() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("rendered job abc-123"))
                .level(Level::Info)
                .module_path(Some("addons::hello_world"))
                .file(Some("addons/src/hello_world.rs"))
                .line(Some(42))
                .build(),
            "2026-10-19T00:00:00Z",
        );

        assert_eq!(
            "INFO 2026-10-19T00:00:00Z addons::hello_world addons/src/hello_world.rs:42 rendered job abc-123",
            line
        );
    }

    #[test]
    fn missing_location_is_marked_unknown() {
        let line = format_line(
            &Record::builder()
                .args(format_args!("Function failed"))
                .level(Level::Error)
                .build(),
            "t",
        );

        assert_eq!("ERROR t <unknown> <unknown>:0 Function failed", line);
    }

    #[test]
    fn filters_below_configured_level() {
        let logger = ConsoleLog {
            level: LevelFilter::Warn,
            destination: LogDestination::Stderr,
        };

        assert!(logger.enabled(&Metadata::builder().level(Level::Error).build()));
        assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Info).build()));
    }
}
