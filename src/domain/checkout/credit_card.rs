//! Credit card input validation.
//!
//! Card data is transient: it exists only long enough to be validated and
//! forwarded to the gateway, and is never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    digits, expiry_year_in_range, validate_card_number, validate_expiry,
};

use super::errors::CheckoutError;

/// Raw card fields as collected by the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCardInput {
    pub number: String,
    pub holder_name: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub ccv: String,
}

/// A card that passed Luhn, expiry and field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub holder_name: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub ccv: String,
}

impl CardDetails {
    /// Validate card input against `today`.
    ///
    /// The date is a parameter so the expiry rules stay deterministic under
    /// test; callers pass the current date.
    pub fn parse(input: &CreditCardInput, today: NaiveDate) -> Result<Self, CheckoutError> {
        let number: String = input.number.chars().filter(|c| !c.is_whitespace()).collect();
        if !validate_card_number(&number) {
            return Err(CheckoutError::validation(
                "number",
                "Número do cartão inválido",
            ));
        }

        let holder_name = input.holder_name.trim();
        if holder_name.chars().count() < 3 {
            return Err(CheckoutError::validation(
                "holderName",
                "Nome no cartão deve ter pelo menos 3 caracteres",
            ));
        }

        let expiry_month: u32 = input
            .expiry_month
            .trim()
            .parse()
            .map_err(|_| CheckoutError::validation("expiryMonth", "Mês inválido"))?;
        if !(1..=12).contains(&expiry_month) {
            return Err(CheckoutError::validation("expiryMonth", "Mês inválido"));
        }

        let expiry_year: i32 = input
            .expiry_year
            .trim()
            .parse()
            .map_err(|_| CheckoutError::validation("expiryYear", "Ano inválido"))?;
        if !expiry_year_in_range(expiry_year, today) {
            return Err(CheckoutError::validation("expiryYear", "Ano inválido"));
        }

        if !validate_expiry(expiry_month, expiry_year, today) {
            return Err(CheckoutError::validation("creditCard", "Cartão expirado"));
        }

        let ccv = digits(&input.ccv);
        if ccv.len() < 3 || ccv.len() > 4 || ccv != input.ccv.trim() {
            return Err(CheckoutError::validation("ccv", "CVV inválido"));
        }

        Ok(CardDetails {
            number,
            holder_name: holder_name.to_string(),
            expiry_month,
            expiry_year,
            ccv,
        })
    }

    /// Month zero-padded the way the gateway expects ("01".."12").
    pub fn expiry_month_padded(&self) -> String {
        format!("{:02}", self.expiry_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn valid_input() -> CreditCardInput {
        CreditCardInput {
            number: "4532 0151 1283 0366".to_string(),
            holder_name: "MARIA SILVA".to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "2030".to_string(),
            ccv: "123".to_string(),
        }
    }

    #[test]
    fn parses_valid_card_and_strips_spacing() {
        let card = CardDetails::parse(&valid_input(), today()).unwrap();
        assert_eq!(card.number, "4532015112830366");
        assert_eq!(card.expiry_month, 12);
        assert_eq!(card.expiry_year, 2030);
        assert_eq!(card.expiry_month_padded(), "12");
    }

    #[test]
    fn pads_single_digit_month() {
        let mut input = valid_input();
        input.expiry_month = "3".to_string();
        let card = CardDetails::parse(&input, today()).unwrap();
        assert_eq!(card.expiry_month_padded(), "03");
    }

    #[test]
    fn rejects_luhn_failure() {
        let mut input = valid_input();
        input.number = "4532015112830367".to_string();
        let err = CardDetails::parse(&input, today()).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "number", .. }));
    }

    #[test]
    fn rejects_expired_card() {
        let mut input = valid_input();
        input.expiry_month = "01".to_string();
        input.expiry_year = "2024".to_string();
        let err = CardDetails::parse(&input, today()).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "creditCard", .. }));
    }

    #[test]
    fn rejects_year_outside_issuing_window() {
        let mut input = valid_input();
        input.expiry_year = "2040".to_string();
        let err = CardDetails::parse(&input, today()).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "expiryYear", .. }));
    }

    #[test]
    fn rejects_month_out_of_range() {
        let mut input = valid_input();
        input.expiry_month = "13".to_string();
        let err = CardDetails::parse(&input, today()).unwrap_err();
        assert!(matches!(err, CheckoutError::Validation { field: "expiryMonth", .. }));
    }

    #[test]
    fn rejects_bad_ccv() {
        for bad in ["12", "12345", "12a"] {
            let mut input = valid_input();
            input.ccv = bad.to_string();
            let err = CardDetails::parse(&input, today()).unwrap_err();
            assert!(matches!(err, CheckoutError::Validation { field: "ccv", .. }));
        }
    }
}
