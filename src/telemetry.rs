//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "warn,vocab=debug,quiz=debug").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//! - Logs go to stderr; stdout belongs to the quiz.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    // Quiet by default so the interactive prompt stays readable.
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}
