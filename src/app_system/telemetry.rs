use tracing_subscriber::EnvFilter;

use super::config::{LogFormat, LoggingConfig};

/// Configures tracing once for the whole process.
///
/// `RUST_LOG` wins over the configured filter when set, so
/// `RUST_LOG=tailor_desk::clients=debug` narrows output without touching
/// configuration. Safe to call more than once; later calls are ignored.
pub fn setup_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    let result = match logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing already initialised");
    }
}
