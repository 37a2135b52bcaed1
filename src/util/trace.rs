//! Installs a `tracing_subscriber` formatter filtered by the environment,
//! e.g. `RUST_LOG=pointcluster=debug`.
//!
//! Records emitted through the `log` facade are forwarded into the
//! subscriber, so library logging and `tracing` spans share one output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    // Initialise tracing with subscribers and environment filter
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
