use crate::error::{Error, Result};
use tracing::Level;
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when set. Output goes to stderr so stdout
/// stays clean for JSON records.
pub fn init_logging(level: Level, json_output: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jubamodel={},warn", level)));

    let installed = if json_output {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_timer(SystemTime)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(fmt_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_timer(SystemTime)
            .with_target(true);

        Registry::default().with(env_filter).with(fmt_layer).try_init()
    };

    installed.map_err(|e| Error::Config(format!("cannot install logger: {}", e)))
}

/// Parse a `--log-level` value
pub fn parse_level(level: &str) -> Result<Level> {
    level
        .parse::<Level>()
        .map_err(|_| Error::Config(format!("invalid log level: {}", level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
        assert!(matches!(parse_level("loud"), Err(Error::Config(_))));
    }
}
