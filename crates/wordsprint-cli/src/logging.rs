//! Diagnostic logging for the command-line tools.
//!
//! The engine logs through `tracing`. Output goes to stderr so it never
//! mixes with the results printed on stdout.
//!
//! - `warn`: unavailable or duplicated word lists
//! - `info`: lists loaded, rounds started and ended
//! - `debug`: skipped entries, search directories
//! - `trace`: per-submission verdicts and variant expansion

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log level for a `-v` count: warn, then info, debug and trace.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity level.
///
/// Calling this twice keeps the first subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = build_env_filter(level_for_verbosity(verbosity));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Filter used when `RUST_LOG` is unset. Other crates stay at warn.
fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,wordsprint_cli={level},wordsprint_core={level},wordsprint_engine={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(3), Level::TRACE);
        assert_eq!(level_for_verbosity(u8::MAX), Level::TRACE);
    }

    #[test]
    fn default_directives_raise_only_our_crates() {
        assert_eq!(
            default_directives(Level::DEBUG),
            "warn,wordsprint_cli=debug,wordsprint_core=debug,wordsprint_engine=debug"
        );
        assert!(default_directives(Level::WARN).split(',').all(|d| d.ends_with("warn")));
    }

    #[test]
    fn default_directives_parse() {
        for verbosity in 0..4 {
            let directives = default_directives(level_for_verbosity(verbosity));
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }
}
