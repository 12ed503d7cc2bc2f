//! Asaas payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Asaas REST API.
//!
//! # Security
//!
//! - The API key travels in the `access_token` header on every request
//! - The key is held in `secrecy::SecretString` and validated against the
//!   provider's `$aact_` prefix before any request is signed with it
//!
//! # Configuration
//!
//! ```ignore
//! let config = AsaasConfig::new("$aact_hmlg_...");
//! let client = AsaasClient::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::GatewayConfig;
use crate::ports::{
    CreateCustomerRequest, CreateSubscriptionRequest, Customer, GatewayError, PaymentGateway,
    PaymentPage, PixQrCode, Subscription, UpdateCustomerRequest,
};

use super::wire::{
    first_error_description, AsaasCustomer, AsaasPaymentList, AsaasPixQrCode, AsaasSubscription,
    CreateCustomerBody, CreateSubscriptionBody, UpdateCustomerBody,
};

/// Header carrying the API key.
const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Fallback when the provider rejects a request without a parseable error list.
const GENERIC_REJECTION: &str = "Erro ao processar requisição";

/// Asaas API configuration.
#[derive(Clone)]
pub struct AsaasConfig {
    /// Asaas secret key ($aact_prod_... or $aact_hmlg_...).
    api_key: SecretString,

    /// Base URL for the Asaas API (default: https://api.asaas.com/v3).
    base_url: String,
}

impl AsaasConfig {
    /// Create a new Asaas configuration with the default base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: "https://api.asaas.com/v3".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Checked at call time so a mangled key becomes a failed envelope for
    /// the request instead of a crash at startup.
    fn validated_key(&self) -> Result<&str, GatewayError> {
        let key = self.api_key.expose_secret().as_str();
        if key.is_empty() {
            return Err(GatewayError::configuration(
                "Asaas API key is not configured",
            ));
        }
        if !key.starts_with("$aact_") {
            return Err(GatewayError::configuration(
                "Asaas API key must start with $aact_prod_ (production) or $aact_hmlg_ (sandbox)",
            ));
        }
        Ok(key)
    }
}

impl From<GatewayConfig> for AsaasConfig {
    fn from(config: GatewayConfig) -> Self {
        AsaasConfig::new(config.api_key).with_base_url(config.base_url)
    }
}

/// Asaas payment gateway adapter.
///
/// Never propagates a panic or a raw transport error past its boundary:
/// every failure becomes a `GatewayError`.
pub struct AsaasClient {
    config: AsaasConfig,
    http_client: reqwest::Client,
}

impl AsaasClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AsaasConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Issue one authenticated JSON request and normalize the outcome.
    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, GatewayError> {
        let key = self.config.validated_key()?;
        let url = format!("{}{}", self.config.base_url, path);

        let mut builder = self
            .http_client
            .request(method, &url)
            .header(ACCESS_TOKEN_HEADER, key);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        if !status.is_success() {
            let err = first_error_description(&bytes).unwrap_or_else(|| {
                GatewayError::rejected(format!("{} (HTTP {})", GENERIC_REJECTION, status.as_u16()))
            });
            tracing::warn!(
                status = status.as_u16(),
                path,
                error = %err.message,
                "Asaas request rejected"
            );
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(path, error = %e, "Failed to parse Asaas response");
            GatewayError::parse(format!("Failed to parse Asaas response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentGateway for AsaasClient {
    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Customer, GatewayError> {
        let body = CreateCustomerBody::from(request);
        let customer: AsaasCustomer = self
            .request(Method::POST, "/customers", Some(&body))
            .await?;
        Ok(customer.into())
    }

    async fn update_customer(
        &self,
        customer_id: &str,
        request: UpdateCustomerRequest,
    ) -> Result<Customer, GatewayError> {
        let body = UpdateCustomerBody::from(request);
        let customer: AsaasCustomer = self
            .request(Method::PUT, &format!("/customers/{}", customer_id), Some(&body))
            .await?;
        Ok(customer.into())
    }

    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<Subscription, GatewayError> {
        let body = CreateSubscriptionBody::from(request);
        // Trailing slash is significant to the provider's router.
        let subscription: AsaasSubscription = self
            .request(Method::POST, "/subscriptions/", Some(&body))
            .await?;
        Ok(subscription.into())
    }

    async fn list_subscription_payments(
        &self,
        subscription_id: &str,
    ) -> Result<PaymentPage, GatewayError> {
        let page: AsaasPaymentList = self
            .request::<(), _>(
                Method::GET,
                &format!("/subscriptions/{}/payments", subscription_id),
                None,
            )
            .await?;
        Ok(page.into())
    }

    async fn pix_qr_code(&self, payment_id: &str) -> Result<PixQrCode, GatewayError> {
        let qr: AsaasPixQrCode = self
            .request::<(), _>(
                Method::GET,
                &format!("/payments/{}/pixQrCode", payment_id),
                None,
            )
            .await?;
        Ok(qr.into())
    }
}
