use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Initialize tracing and logging
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so that menus printed on stdout stay pipeable.
pub fn init_observability(service_version: &str, logging: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
    }

    tracing::debug!(
        service.version = service_version,
        log.format = logging.format.as_ref(),
        "Observability initialized"
    );

    Ok(())
}
