use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr log subscriber.
///
/// The level is taken from `RUST_LOG`, defaulting to info for ktra itself and
/// warnings for everything else. Stdout is left to the parsed output.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ktra=info,warn"));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
