//! tracing subscriber for the command-line tool. Everything goes to stderr so stdout
//! stays clean for the data rows.
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when the config does not name one.
pub const DEFAULT_LEVEL: &str = "info";

/// Filter for a configured level string such as `debug` or `warn,marslander_physics=debug`.
pub fn level_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}

/// Installs the global subscriber. `RUST_LOG` wins over `configured` when it is set.
pub fn init_logging(configured: EnvFilter) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_level_is_used_as_is() {
        assert!(level_filter("debug").unwrap().to_string().contains("debug"));
        assert!(level_filter(DEFAULT_LEVEL).is_ok());
    }

    #[test]
    fn per_crate_directives_survive() {
        let filter = level_filter("warn,marslander_physics=debug").unwrap().to_string();
        assert!(filter.contains("marslander_physics=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn unknown_level_is_an_error() {
        assert!(level_filter("marslander=loudest").is_err());
    }
}
