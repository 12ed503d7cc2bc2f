//! Asaas gateway adapter: HTTP client, wire types, and a test double.

mod client;
mod mock_gateway;
mod wire;

pub use client::{AsaasClient, AsaasConfig};
pub use mock_gateway::MockPaymentGateway;
