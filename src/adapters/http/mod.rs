//! HTTP adapter: routers, handlers and DTOs.

pub mod checkout;
pub mod health;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use checkout::{checkout_routes, CheckoutAppState};

/// Assemble the full application router.
///
/// Checkout endpoints live under `/api/checkout`; `/health` sits outside the
/// API prefix so load balancers can probe it unauthenticated.
pub fn app_router(state: CheckoutAppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/checkout", checkout_routes())
        .merge(health::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .with_state(state)
}

/// Without configured origins every origin is allowed, which suits local
/// development; production deployments set an explicit list.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
