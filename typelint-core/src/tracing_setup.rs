//! Tracing initialization for binaries.
//!
//! Output goes to stderr: in headless mode stdout carries the framed
//! message stream and must stay clean.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, filtered by `TYPELINT_LOG`
/// (falling back to `RUST_LOG`, then `warn`).
///
/// Library code never calls this; only binary entry points do. Calling it
/// twice is a no-op.
pub fn init_tracing() {
    let filter = std::env::var("TYPELINT_LOG")
        .ok()
        .and_then(|v| v.parse::<EnvFilter>().ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
