use crate::config::LOG_ENV_VAR;
use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `info` when missing or invalid.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with a level taken from the `SHIPGRID_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Output goes to stderr.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    }
}
