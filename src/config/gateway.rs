//! Asaas gateway configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Production keys carry this sub-prefix.
const PRODUCTION_KEY_PREFIX: &str = "$aact_prod_";
/// Sandbox ("homologação") keys carry this sub-prefix.
const SANDBOX_KEY_PREFIX: &str = "$aact_hmlg_";

/// Payment gateway configuration (Asaas).
///
/// The key is read once at startup and validated against the strict provider
/// prefix. Keys that lost their leading `$` to shell or dotenv expansion are
/// rejected rather than patched; the fix belongs in the environment file
/// (escape it as `\$aact_...`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Asaas API key ($aact_prod_... or $aact_hmlg_...)
    pub api_key: String,

    /// Base URL for the Asaas API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl GatewayConfig {
    /// Check if the key targets the sandbox environment
    pub fn is_sandbox(&self) -> bool {
        self.api_key.starts_with(SANDBOX_KEY_PREFIX)
    }

    /// Check if the key targets the production environment
    pub fn is_production(&self) -> bool {
        self.api_key.starts_with(PRODUCTION_KEY_PREFIX)
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY_API_KEY"));
        }
        if !self.is_production() && !self.is_sandbox() {
            return Err(ValidationError::InvalidAsaasKey);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidGatewayUrl);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.asaas.com/v3".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> GatewayConfig {
        GatewayConfig {
            api_key: key.to_string(),
            base_url: default_base_url(),
        }
    }

    #[test]
    fn production_key_validates() {
        let config = config_with_key("$aact_prod_000abc");
        assert!(config.validate().is_ok());
        assert!(config.is_production());
        assert!(!config.is_sandbox());
    }

    #[test]
    fn sandbox_key_validates() {
        let config = config_with_key("$aact_hmlg_000abc");
        assert!(config.validate().is_ok());
        assert!(config.is_sandbox());
        assert!(!config.is_production());
    }

    #[test]
    fn missing_key_is_reported_as_missing() {
        let config = GatewayConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("GATEWAY_API_KEY"))
        ));
    }

    #[test]
    fn key_without_dollar_prefix_is_rejected_not_patched() {
        // A key mangled by dotenv expansion must fail fast.
        let config = config_with_key("aact_prod_000abc");
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidAsaasKey)
        ));
    }

    #[test]
    fn key_with_escape_artifact_is_rejected() {
        let config = config_with_key("\\$aact_prod_000abc");
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidAsaasKey)
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = config_with_key("$aact_hmlg_000abc");
        config.base_url = "ftp://api.asaas.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidGatewayUrl)
        ));
    }
}
