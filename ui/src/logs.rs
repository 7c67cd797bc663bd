//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Initialize logging. Call once from the application entry point.
pub fn init_logging() {
    let env_filter = EnvFilter::new("error,booking_ui=debug,payloads=info");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    match result {
        Ok(()) => tracing::info!("Initialized logs"),
        Err(e) => tracing::warn!("Logging was already initialized: {e}"),
    }
}
