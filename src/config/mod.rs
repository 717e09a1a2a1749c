//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `TENANT_DESK` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use tenant_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod logging;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::domain::conversation::MessageCatalog;
use crate::domain::maintenance::TicketPolicy;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// in-memory service. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// PostgreSQL ticket store; tickets stay in memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Fixed texts the facilitator sends
    #[serde(default)]
    pub messages: MessageCatalog,

    /// Defaults filled into every ticket
    #[serde(default)]
    pub tickets: TicketPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `TENANT_DESK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TENANT_DESK__DATABASE__URL=...` -> `database.url = ...`
    /// - `TENANT_DESK__MESSAGES__GREETING=...` -> `messages.greeting = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TENANT_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.logging.validate()?;
        match &self.database {
            Some(database) => database.validate()?,
            // In-memory tickets do not survive a restart
            None if self.is_production() => {
                return Err(ValidationError::MissingRequired("database"));
            }
            None => {}
        }
        if let Some(name) = self.messages.first_blank() {
            return Err(ValidationError::BlankMessage(name));
        }
        if self.tickets.default_issue_area.trim().is_empty() {
            return Err(ValidationError::BlankTicketDefault("default_issue_area"));
        }
        if self.tickets.photo_placeholder_url.trim().is_empty() {
            return Err(ValidationError::BlankTicketDefault("photo_placeholder_url"));
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "TENANT_DESK__SERVER__PORT",
        "TENANT_DESK__SERVER__ENVIRONMENT",
        "TENANT_DESK__DATABASE__URL",
        "TENANT_DESK__DATABASE__MAX_CONNECTIONS",
        "TENANT_DESK__MESSAGES__GREETING",
        "TENANT_DESK__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.database.is_none());
        assert_eq!(config.messages, MessageCatalog::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TENANT_DESK__SERVER__PORT", "9090");
        env::set_var("TENANT_DESK__SERVER__ENVIRONMENT", "production");
        env::set_var("TENANT_DESK__DATABASE__URL", "postgresql://test@localhost/tickets");
        env::set_var("TENANT_DESK__DATABASE__MAX_CONNECTIONS", "8");
        env::set_var("TENANT_DESK__MESSAGES__GREETING", "Welcome home!");
        env::set_var("TENANT_DESK__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 9090);
        assert!(config.is_production());
        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/tickets");
        assert_eq!(database.max_connections, 8);
        assert_eq!(config.messages.greeting, "Welcome home!");
        assert_eq!(
            config.messages.follow_up,
            MessageCatalog::default().follow_up
        );
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_message() {
        let mut config = AppConfig::default();
        config.messages.emergency_escalation = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::BlankMessage("emergency_escalation"))
        );
    }

    #[test]
    fn test_validate_rejects_blank_issue_area_default() {
        let mut config = AppConfig::default();
        config.tickets.default_issue_area = String::new();
        assert_eq!(
            config.validate(),
            Err(ValidationError::BlankTicketDefault("default_issue_area"))
        );
    }

    #[test]
    fn test_validate_requires_database_in_production() {
        let mut config = AppConfig::default();
        config.server.environment = Environment::Production;
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("database"))
        );
    }

    #[test]
    fn test_validate_checks_database_when_present() {
        let config = AppConfig {
            database: Some(DatabaseConfig::default()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
