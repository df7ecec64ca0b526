use dsproxy_core::Config;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout belongs to the daemon.
pub fn init(config: &Config) {
    let filter = if config.debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
