//! Checkout domain: validated value objects for the subscription workflow.

mod credit_card;
mod customer;
mod errors;

pub use credit_card::{CardDetails, CreditCardInput};
pub use customer::{CustomerDetails, CustomerInput, PersonType, PhoneNumber};
pub use errors::CheckoutError;
