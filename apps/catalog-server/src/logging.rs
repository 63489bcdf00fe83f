use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::LoggingConfig;

/// Filter directive for the given verbosity.
///
/// `-v` flags only ever raise the configured level. Per-target directives
/// such as `products=debug,warn` are kept as written.
#[must_use]
pub fn directive(config: &LoggingConfig, verbose: u8) -> &str {
    let (flag, flag_directive) = match verbose {
        0 => return &config.level,
        1 => (LevelFilter::INFO, "info"),
        2 => (LevelFilter::DEBUG, "debug"),
        _ => (LevelFilter::TRACE, "trace"),
    };

    match config.level.trim().parse::<LevelFilter>() {
        Ok(configured) if configured < flag => flag_directive,
        _ => &config.level,
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over both the config and `-v`.
///
/// # Errors
/// Returns an error if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(config, verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn config(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_owned(),
            json: false,
        }
    }

    #[test]
    fn verbosity_raises_the_level() {
        let cfg = config("warn");
        assert_eq!(directive(&cfg, 0), "warn");
        assert_eq!(directive(&cfg, 1), "info");
        assert_eq!(directive(&cfg, 2), "debug");
        assert_eq!(directive(&cfg, 5), "trace");
    }

    #[test]
    fn verbosity_never_lowers_the_level() {
        assert_eq!(directive(&config("debug"), 1), "debug");
        assert_eq!(directive(&config("trace"), 2), "trace");
        assert_eq!(directive(&config("DEBUG"), 2), "DEBUG");
    }

    #[test]
    fn per_target_directives_are_kept() {
        let cfg = config("products=debug,warn");
        assert_eq!(directive(&cfg, 3), "products=debug,warn");
    }
}
