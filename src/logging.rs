// src/logging.rs
// =============================================================================
// Logging setup for the binary.
//
// The library code only emits `tracing` events; this is the one place a
// subscriber is installed. Logs go to stderr so stdout stays clean for --json.
//
// Verbosity (-v flags) picks the default filter; RUST_LOG overrides it.
//   (none)  warn
//   -v      page_mirror=info
//   -vv     page_mirror=debug
//   -vvv    trace
// =============================================================================

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given number of -v flags.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,page_mirror=info",
        2 => "warn,page_mirror=debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. Call once, before any mirror work.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
