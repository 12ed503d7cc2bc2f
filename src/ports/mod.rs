//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - Contract for the Asaas payment provider

mod payment_gateway;

pub use payment_gateway::{
    BillingCycle, BillingType, CreateCustomerRequest, CreateSubscriptionRequest, CreditCardData,
    CreditCardHolderInfo, Customer, GatewayError, GatewayErrorCode, Payment, PaymentGateway,
    PaymentPage, PixQrCode, Subscription, SubscriptionStatus, UpdateCustomerRequest,
};
