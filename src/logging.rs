//! Structured logging setup
//!
//! Library code emits `tracing` events; the binary installs a subscriber that
//! writes them to stderr so they never interleave with ladder output on stdout.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when the requested level cannot be parsed
const DEFAULT_DIRECTIVE: &str = "word_ladder=warn";

/// Environment variable consulted for a filter when `RUST_LOG` is unset
pub const LOG_ENV: &str = "WORD_LADDER_LOG";

/// Initialize structured logging based on CLI arguments
///
/// `--log-level` wins over `--verbose`; both lose to `RUST_LOG` or
/// `WORD_LADDER_LOG` when either is set. Without any of them only warnings
/// (such as a missing word list) are shown.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| level_filter(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Build a filter from a CLI level, falling back to warnings for unparsable input
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(filter_directive(level)).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log level '{level}' ({e}), using warn");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

/// Scope a bare level to this crate, pass full directives through untouched
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("word_ladder={level}")
    }
}
