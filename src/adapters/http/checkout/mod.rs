//! HTTP surface for the checkout workflow.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CheckoutAppState;
pub use routes::checkout_routes;
