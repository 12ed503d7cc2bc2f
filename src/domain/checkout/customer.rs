//! Customer input validation and normalization.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{digits, validate_email, validate_tax_id};

use super::errors::CheckoutError;

/// Raw customer fields as collected by the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub cpf_cnpj: String,
    pub email: String,
    pub phone: String,
}

/// Whether the tax id belongs to an individual or a company.
///
/// Derived from the digit count: 11 digits is a CPF (individual), 14 a CNPJ
/// (company).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonType {
    #[serde(rename = "FISICA")]
    Individual,
    #[serde(rename = "JURIDICA")]
    Company,
}

/// A phone number routed into the slot the gateway expects.
///
/// Ten digits go to the landline field, eleven to the mobile field; the two
/// slots are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumber {
    Landline(String),
    Mobile(String),
}

impl PhoneNumber {
    /// Normalize to digits and route by length.
    pub fn parse(value: &str) -> Result<Self, CheckoutError> {
        let cleaned = digits(value);
        match cleaned.len() {
            10 => Ok(PhoneNumber::Landline(cleaned)),
            11 => Ok(PhoneNumber::Mobile(cleaned)),
            _ => Err(CheckoutError::validation("phone", "Telefone inválido")),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PhoneNumber::Landline(n) | PhoneNumber::Mobile(n) => n,
        }
    }
}

/// Validated, digit-normalized customer data, safe to hand to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub cpf_cnpj: String,
    pub email: String,
    pub phone: PhoneNumber,
}

impl CustomerDetails {
    /// Validate and normalize raw form input.
    ///
    /// Rejects before any network call: short names, malformed e-mails,
    /// tax ids failing their checksum, and phones outside the 10/11 digit
    /// slots all stop here.
    pub fn parse(input: &CustomerInput) -> Result<Self, CheckoutError> {
        let name = input.name.trim();
        if name.chars().count() < 3 {
            return Err(CheckoutError::validation(
                "name",
                "Nome deve ter pelo menos 3 caracteres",
            ));
        }

        if !validate_tax_id(&input.cpf_cnpj) {
            return Err(CheckoutError::validation("cpfCnpj", "CPF/CNPJ inválido"));
        }

        let email = input.email.trim();
        if !validate_email(email) {
            return Err(CheckoutError::validation("email", "Email inválido"));
        }

        let phone = PhoneNumber::parse(&input.phone)?;

        Ok(CustomerDetails {
            name: name.to_string(),
            cpf_cnpj: digits(&input.cpf_cnpj),
            email: email.to_string(),
            phone,
        })
    }

    pub fn person_type(&self) -> PersonType {
        if self.cpf_cnpj.len() == 14 {
            PersonType::Company
        } else {
            PersonType::Individual
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CustomerInput {
        CustomerInput {
            name: "Maria Silva".to_string(),
            cpf_cnpj: "529.982.247-25".to_string(),
            email: "maria@example.com".to_string(),
            phone: "(11) 98765-4321".to_string(),
        }
    }

    #[test]
    fn parses_and_normalizes_valid_input() {
        let details = CustomerDetails::parse(&valid_input()).unwrap();
        assert_eq!(details.cpf_cnpj, "52998224725");
        assert_eq!(details.phone, PhoneNumber::Mobile("11987654321".to_string()));
        assert_eq!(details.person_type(), PersonType::Individual);
    }

    #[test]
    fn ten_digit_phone_routes_to_landline() {
        let mut input = valid_input();
        input.phone = "(11) 3333-4444".to_string();
        let details = CustomerDetails::parse(&input).unwrap();
        assert_eq!(details.phone, PhoneNumber::Landline("1133334444".to_string()));
    }

    #[test]
    fn cnpj_yields_company_person_type() {
        let mut input = valid_input();
        input.cpf_cnpj = "11.222.333/0001-81".to_string();
        let details = CustomerDetails::parse(&input).unwrap();
        assert_eq!(details.cpf_cnpj, "11222333000181");
        assert_eq!(details.person_type(), PersonType::Company);
    }

    #[test]
    fn rejects_short_name() {
        let mut input = valid_input();
        input.name = "Jo".to_string();
        let err = CustomerDetails::parse(&input).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "name", .. }));
    }

    #[test]
    fn rejects_bad_tax_id_before_anything_else_network_bound() {
        let mut input = valid_input();
        input.cpf_cnpj = "111.111.111-11".to_string();
        let err = CustomerDetails::parse(&input).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "cpfCnpj", .. }));
    }

    #[test]
    fn rejects_bad_email() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        let err = CustomerDetails::parse(&input).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "email", .. }));
    }

    #[test]
    fn rejects_phone_with_wrong_digit_count() {
        let mut input = valid_input();
        input.phone = "123".to_string();
        let err = CustomerDetails::parse(&input).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "phone", .. }));
    }

    #[test]
    fn normalization_is_idempotent() {
        let details = CustomerDetails::parse(&valid_input()).unwrap();
        let reparsed = CustomerDetails::parse(&CustomerInput {
            name: details.name.clone(),
            cpf_cnpj: details.cpf_cnpj.clone(),
            email: details.email.clone(),
            phone: details.phone.as_str().to_string(),
        })
        .unwrap();
        assert_eq!(details, reparsed);
    }
}
