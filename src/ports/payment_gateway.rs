//! Payment gateway port for the Asaas API.
//!
//! Defines the contract the orchestration layer depends on. Implementations
//! own authentication and error normalization: every failure mode (network,
//! HTTP rejection, malformed configuration) comes back as a `GatewayError`,
//! never a panic.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::PersonType;

/// Port for the payment gateway.
///
/// Each method maps to one provider endpoint. Calls are sequential within a
/// checkout: every step depends on an id produced by the previous one.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a customer record owned by the gateway.
    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Customer, GatewayError>;

    /// Partially update a customer (notification preferences).
    async fn update_customer(
        &self,
        customer_id: &str,
        request: UpdateCustomerRequest,
    ) -> Result<Customer, GatewayError>;

    /// Create a monthly credit-card subscription.
    async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> Result<Subscription, GatewayError>;

    /// List the payments the gateway produced for a subscription.
    async fn list_subscription_payments(
        &self,
        subscription_id: &str,
    ) -> Result<PaymentPage, GatewayError>;

    /// Fetch the PIX QR code for a payment.
    ///
    /// Part of the client surface; the credit-card checkout never calls it.
    async fn pix_qr_code(&self, payment_id: &str) -> Result<PixQrCode, GatewayError>;
}

// ════════════════════════════════════════════════════════════════════════════════
// Request types
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerRequest {
    pub name: String,
    /// Digit-only CPF or CNPJ; must already have passed its checksum.
    pub cpf_cnpj: String,
    pub email: String,
    /// Ten-digit landline, exclusive with `mobile_phone`.
    pub phone: Option<String>,
    /// Eleven-digit mobile, exclusive with `phone`.
    pub mobile_phone: Option<String>,
    /// Suppress the gateway's own billing notifications (e-mail/SMS).
    pub notification_disabled: bool,
}

/// Partial customer update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCustomerRequest {
    pub notification_disabled: Option<bool>,
}

/// Card data forwarded to the gateway; never stored locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCardData {
    pub holder_name: String,
    pub number: String,
    /// Zero-padded month, "01".."12".
    pub expiry_month: String,
    pub expiry_year: String,
    pub ccv: String,
}

/// Cardholder identity the gateway requires for anti-fraud checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCardHolderInfo {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    pub postal_code: String,
    pub address_number: String,
    pub phone: String,
}

/// Request to create a monthly credit-card subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSubscriptionRequest {
    pub customer_id: String,
    pub value: f64,
    /// First charge date; "today" bills immediately, a future date defers
    /// charging until that date.
    pub next_due_date: NaiveDate,
    pub description: Option<String>,
    pub credit_card: CreditCardData,
    pub credit_card_holder_info: CreditCardHolderInfo,
    /// Origin of the checkout submission, forwarded for anti-fraud.
    pub remote_ip: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response types
// ════════════════════════════════════════════════════════════════════════════════

/// Customer as echoed back by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub cpf_cnpj: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub person_type: PersonType,
}

/// Billing method of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    CreditCard,
    Pix,
    Boleto,
}

/// Recurrence interval; this workflow only creates monthly subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    Monthly,
}

/// Subscription status reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Inactive,
    /// Forward-compatibility for statuses added by the provider.
    #[serde(other)]
    Unknown,
}

/// Subscription created by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    /// Gateway customer id this subscription bills.
    pub customer_id: String,
    pub billing_type: BillingType,
    pub cycle: BillingCycle,
    pub value: f64,
    pub next_due_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub description: Option<String>,
}

/// A payment produced asynchronously by the gateway for a subscription.
///
/// The orchestrator only ever observes these through the list query; it never
/// creates one directly. Status is a free-form provider string (PENDING,
/// CONFIRMED, RECEIVED, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub customer_id: String,
    pub subscription_id: Option<String>,
    pub value: f64,
    pub net_value: Option<f64>,
    pub billing_type: BillingType,
    pub status: String,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}

/// Paginated payment listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentPage {
    pub has_more: bool,
    pub total_count: u64,
    pub limit: u32,
    pub offset: u32,
    pub data: Vec<Payment>,
}

/// PIX QR code attached to a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixQrCode {
    /// Base64-encoded QR code image.
    pub encoded_image: String,
    /// Copy-and-paste PIX payload.
    pub payload: String,
    pub expiration_date: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Errors from gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    pub code: GatewayErrorCode,
    /// Human-readable message; for rejections this is the provider's first
    /// error description, verbatim.
    pub message: String,
    /// Provider's own error code when one was returned.
    pub provider_code: Option<String>,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Secret key missing or malformed; the process cannot serve requests.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Configuration, message)
    }

    /// Transport-level failure (DNS, TLS, connection reset).
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Network, message)
    }

    /// Provider returned a non-success HTTP status.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Rejected, message)
    }

    /// Response body was not the JSON shape we expected.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Parse, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorCode {
    Configuration,
    Network,
    Rejected,
    Parse,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::Configuration => "configuration_error",
            GatewayErrorCode::Network => "network_error",
            GatewayErrorCode::Rejected => "gateway_rejection",
            GatewayErrorCode::Parse => "parse_error",
        };
        write!(f, "{}", s)
    }
}
