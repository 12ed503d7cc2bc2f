//! Service entry point: configuration, tracing, router, listener.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use asaas_checkout::adapters::asaas::{AsaasClient, AsaasConfig};
use asaas_checkout::adapters::http::{app_router, CheckoutAppState};
use asaas_checkout::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let gateway = Arc::new(AsaasClient::new(AsaasConfig::from(config.gateway.clone())));
    let state = CheckoutAppState {
        gateway,
        plans: config.plans.catalog(),
    };

    let app = app_router(state, &config.server);
    let addr = config.server.socket_addr()?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        sandbox = config.gateway.is_sandbox(),
        "Starting checkout service"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter; production logs as JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}
