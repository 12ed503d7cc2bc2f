//! Error taxonomy for the checkout workflow.

use thiserror::Error;

/// Failures surfaced by the checkout handlers.
///
/// Validation failures never reach the network; gateway failures carry the
/// provider's first error description verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("{field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{0}")]
    Gateway(String),
}

impl CheckoutError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        CheckoutError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CheckoutError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = CheckoutError::validation("cpfCnpj", "CPF/CNPJ inválido");
        assert_eq!(err.to_string(), "cpfCnpj: CPF/CNPJ inválido");
        assert!(err.is_validation());
    }

    #[test]
    fn gateway_error_surfaces_message_verbatim() {
        let err = CheckoutError::Gateway("Cartão recusado".to_string());
        assert_eq!(err.to_string(), "Cartão recusado");
        assert!(!err.is_validation());
    }
}
