//! Axum router configuration for the checkout endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_customer, create_subscription, CheckoutAppState};

/// Create the checkout API router.
///
/// # Routes
/// - `POST /customers` - Create a gateway customer (notifications disabled)
/// - `POST /subscriptions` - Create the monthly credit-card subscription
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new()
        .route("/customers", post(create_customer))
        .route("/subscriptions", post(create_subscription))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::asaas::MockPaymentGateway;
    use crate::config::PlanConfig;

    #[test]
    fn checkout_routes_creates_router() {
        let state = CheckoutAppState {
            gateway: Arc::new(MockPaymentGateway::new()),
            plans: PlanConfig::default().catalog(),
        };
        let _: Router<()> = checkout_routes().with_state(state);
    }
}
