use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Env var holding a full tracing filter, e.g. `SNIPZ_LOG=snipzapp=debug`.
pub const LOG_ENV: &str = "SNIPZ_LOG";

/// Installs the stderr subscriber. Safe to call more than once.
///
/// `--verbose` wins, then `SNIPZ_LOG`, then the configured level.
pub fn init(verbose: bool, configured_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
            EnvFilter::try_new(configured_level).unwrap_or_else(|_| EnvFilter::new("warn"))
        })
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
