//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `ASAAS_CHECKOUT` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use asaas_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod gateway;
mod plans;
mod server;

pub use error::{ConfigError, ValidationError};
pub use gateway::GatewayConfig;
pub use plans::{Plan, PlanCatalog, PlanConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment gateway configuration (Asaas)
    pub gateway: GatewayConfig,

    /// Plan catalog slots
    #[serde(default)]
    pub plans: PlanConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `ASAAS_CHECKOUT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ASAAS_CHECKOUT__GATEWAY__API_KEY=...` -> `gateway.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ASAAS_CHECKOUT")
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
    /// Returns `ValidationError` if any configuration value is invalid,
    /// including an API key that does not carry the provider prefix.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.gateway.validate()?;
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

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("ASAAS_CHECKOUT__GATEWAY__API_KEY", "$aact_hmlg_testkey");
    }

    fn clear_env() {
        env::remove_var("ASAAS_CHECKOUT__GATEWAY__API_KEY");
        env::remove_var("ASAAS_CHECKOUT__GATEWAY__BASE_URL");
        env::remove_var("ASAAS_CHECKOUT__SERVER__PORT");
        env::remove_var("ASAAS_CHECKOUT__SERVER__ENVIRONMENT");
        env::remove_var("ASAAS_CHECKOUT__PLANS__PLAN_1_ID");
        env::remove_var("ASAAS_CHECKOUT__PLANS__PLAN_1_VALUE");
    }

    #[test]
    fn load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.gateway.api_key, "$aact_hmlg_testkey");
        assert_eq!(config.gateway.base_url, "https://api.asaas.com/v3");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_defaults_apply() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn plan_slots_load_into_catalog() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var(
            "ASAAS_CHECKOUT__PLANS__PLAN_1_ID",
            "8c51f0d4-6de2-4f2e-9a2a-111111111111",
        );
        env::set_var("ASAAS_CHECKOUT__PLANS__PLAN_1_VALUE", "49.9");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let catalog = config.plans.catalog();
        assert_eq!(catalog.all().len(), 1);
        assert_eq!(catalog.all()[0].value, 49.9);
    }

    #[test]
    fn custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("ASAAS_CHECKOUT__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
