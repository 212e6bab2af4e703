//! Diagnostic logging for the binary. Library code only emits `tracing` events.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive, e.g. `keep_console=trace`.
pub const LOG_ENV: &str = "KEEP_CONSOLE_LOG";

/// Install the global subscriber, writing to stderr so stdout stays usable by `print`.
///
/// `KEEP_CONSOLE_LOG` wins over `verbose`; otherwise `verbose` selects `debug` and the
/// default is `warn`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive)
            .with_context(|| format!("Invalid {} filter: \"{}\"", LOG_ENV, directive))?,
        Err(_) => EnvFilter::new(default_directive(verbose)),
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
