use tracing_subscriber::EnvFilter;

/// Structured logs to stdout; external dashboards consume them as sinks.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_telemetry() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("telemetry init failed: {e}"))
}
