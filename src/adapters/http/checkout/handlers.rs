//! HTTP handlers for the checkout endpoints.
//!
//! These handlers connect Axum routes to the application layer command
//! handlers and render every outcome through the uniform response envelope.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::{
    CreateCustomerCommand, CreateCustomerHandler, CreateSubscriptionCommand,
    CreateSubscriptionHandler,
};
use crate::config::PlanCatalog;
use crate::domain::checkout::CheckoutError;
use crate::ports::PaymentGateway;

use super::dto::{
    ApiResponse, CheckoutResponse, CreateCustomerDto, CreateSubscriptionDto, CustomerResponse,
    PaymentResponse, SubscriptionResponse,
};

/// Anti-fraud IP when no proxy header identifies the client.
const FALLBACK_CLIENT_IP: &str = "127.0.0.1";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub plans: PlanCatalog,
}

impl CheckoutAppState {
    pub fn create_customer_handler(&self) -> CreateCustomerHandler {
        CreateCustomerHandler::new(self.gateway.clone())
    }

    pub fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.gateway.clone())
    }
}

/// First address in `X-Forwarded-For`, or the loopback fallback.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(FALLBACK_CLIENT_IP)
        .to_string()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/checkout/customers - Create a gateway customer
pub async fn create_customer(
    State(state): State<CheckoutAppState>,
    Json(request): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let handler = state.create_customer_handler();
    let customer = handler
        .handle(CreateCustomerCommand {
            customer: request.customer.into(),
        })
        .await?;

    let response = ApiResponse::ok(CustomerResponse::from(customer));
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/checkout/subscriptions - Create the monthly subscription
pub async fn create_subscription(
    State(state): State<CheckoutAppState>,
    headers: HeaderMap,
    Json(request): Json<CreateSubscriptionDto>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let amount = resolve_amount(&state.plans, &request)?;

    let handler = state.create_subscription_handler();
    let outcome = handler
        .handle(CreateSubscriptionCommand {
            customer_id: request.customer_id,
            amount,
            credit_card: request.credit_card.into(),
            customer: request.customer.into(),
            remote_ip: client_ip(&headers),
        })
        .await?;

    let response = ApiResponse::ok(CheckoutResponse {
        subscription: SubscriptionResponse::from(outcome.subscription),
        first_payment: outcome.first_payment.map(PaymentResponse::from),
    });
    Ok((StatusCode::CREATED, Json(response)))
}

/// A configured plan id wins over an explicit value.
fn resolve_amount(
    plans: &PlanCatalog,
    request: &CreateSubscriptionDto,
) -> Result<f64, CheckoutError> {
    if let Some(plan_id) = request.plan_id {
        let plan = plans
            .find(plan_id)
            .ok_or_else(|| CheckoutError::validation("planId", "Plano não encontrado"))?;
        return Ok(plan.value);
    }
    request
        .value
        .ok_or_else(|| CheckoutError::validation("value", "Valor não informado"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Renders `CheckoutError` through the response envelope.
///
/// Validation failures are the client's fault (422); gateway failures mean
/// the upstream provider said no (502). Both carry the human-readable
/// message in `error`.
#[derive(Debug)]
pub struct CheckoutApiError(CheckoutError);

impl From<CheckoutError> for CheckoutApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.0 {
            CheckoutError::Validation { reason, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, reason.clone())
            }
            CheckoutError::Gateway(message) => (StatusCode::BAD_GATEWAY, message.clone()),
        };
        let body = ApiResponse::<()>::err(message);
        (status, Json(body)).into_response()
    }
}
