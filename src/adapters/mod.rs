//! Adapters: concrete implementations of the ports.

pub mod asaas;
pub mod http;
