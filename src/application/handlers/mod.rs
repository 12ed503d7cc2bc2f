//! Application command handlers.
//!
//! One handler per checkout step; both depend only on the `PaymentGateway`
//! port.

mod create_customer;
mod create_subscription;

pub use create_customer::{CreateCustomerCommand, CreateCustomerHandler};
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, SubscriptionOutcome,
};
