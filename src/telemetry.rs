//! Tracing subscriber setup and per-session spans.

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::Span;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::domain::foundation::{SessionId, UserId};

static INSTALLED: OnceCell<LogFormat> = OnceCell::new();

/// Failures while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Another subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this again after a
/// successful install is a no-op.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    INSTALLED
        .get_or_try_init(|| {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.filter))
                .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?;

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match config.format {
                LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
                LogFormat::Json => registry
                    .with(fmt::layer().json().with_current_span(true))
                    .try_init(),
            };
            installed
                .map(|_| config.format)
                .map_err(|e| TelemetryError::AlreadyInstalled(e.to_string()))
        })
        .map(|_| ())
}

/// Span every event of one chat session is recorded under.
pub fn session_span(session_id: &SessionId, user_id: &UserId) -> Span {
    tracing::info_span!("session", session_id = %session_id, user_id = %user_id)
}
