//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `validation` - Pure validators (CPF/CNPJ, Luhn, expiry) and display masks
//! - `checkout` - Validated customer/card value objects and the error taxonomy
//!
//! Nothing in this layer performs I/O.

pub mod checkout;
pub mod validation;
