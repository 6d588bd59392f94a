// File: crates/scaling-plots/src/telemetry.rs
// Summary: tracing subscriber setup; diagnostics go to stderr so stdout stays the console report.

use tracing::{subscriber::set_global_default, Subscriber};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Compose the env filter and a stderr formatting layer.
/// `RUST_LOG` wins over `default_filter` when set.
pub fn get_subscriber(default_filter: impl AsRef<str>) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    Registry::default().with(env_filter).with(formatting_layer)
}

/// Register a subscriber as global default. Only call this once.
pub fn init_subscriber(subscriber: impl Subscriber + Sync + Send) -> anyhow::Result<()> {
    set_global_default(subscriber)?;
    Ok(())
}
