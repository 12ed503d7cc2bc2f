//! Subscription checkout service for the Asaas payment gateway.
//!
//! Validates Brazilian customer data (CPF/CNPJ, phone, e-mail) and credit
//! cards locally, then drives the gateway through a fixed sequence: create
//! the customer with notifications disabled, create a monthly credit-card
//! subscription billed today, re-assert the notification opt-out, and look
//! up the first generated payment.
//!
//! # Architecture
//!
//! Hexagonal layout:
//! - `domain` - validation rules and checkout types, no I/O
//! - `ports` - the `PaymentGateway` trait the application depends on
//! - `application` - command handlers orchestrating the checkout
//! - `adapters` - the Asaas HTTP client and the Axum API surface
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
