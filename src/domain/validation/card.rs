//! Credit card number and expiry validation.

use chrono::{Datelike, NaiveDate};

/// How far into the future an expiry year may lie.
pub const MAX_EXPIRY_YEARS_AHEAD: i32 = 10;

/// Validate a card number with the Luhn mod-10 checksum.
///
/// Whitespace is stripped first; 13 to 19 digits are accepted, matching the
/// lengths issued by the major card networks.
pub fn validate_card_number(value: &str) -> bool {
    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() < 13 || cleaned.len() > 19 || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let mut sum = 0;
    let mut double = false;
    for c in cleaned.chars().rev() {
        let mut digit = c.to_digit(10).unwrap_or(0);
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }
    sum % 10 == 0
}

/// An expiry of month/year is valid when the first day of that month lies
/// strictly after `today`. A card expiring in the current month is rejected,
/// since the gateway may only settle the first charge days later.
pub fn validate_expiry(month: u32, year: i32, today: NaiveDate) -> bool {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(expiry) => expiry > today,
        None => false,
    }
}

/// Expiry year must fall within the issuing window used by card networks.
pub fn expiry_year_in_range(year: i32, today: NaiveDate) -> bool {
    let current = today.year();
    (current..=current + MAX_EXPIRY_YEARS_AHEAD).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_known_luhn_valid_number() {
        assert!(validate_card_number("4532015112830366"));
        assert!(validate_card_number("4532 0151 1283 0366"));
        assert!(validate_card_number("5555555555554444"));
    }

    #[test]
    fn rejects_luhn_invalid_number() {
        assert!(!validate_card_number("4532015112830367"));
        assert!(!validate_card_number("1234567890123456"));
    }

    #[test]
    fn rejects_out_of_range_lengths_and_letters() {
        assert!(!validate_card_number("411111111111")); // 12 digits
        assert!(!validate_card_number("45320151128303661111")); // 20 digits
        assert!(!validate_card_number("4532a15112830366"));
        assert!(!validate_card_number(""));
    }

    #[test]
    fn expiry_must_be_strictly_in_future() {
        let today = date(2024, 1, 1);
        assert!(!validate_expiry(1, 2020, today));
        assert!(validate_expiry(12, 2030, today));
        // First day of the current month is not after today.
        assert!(!validate_expiry(1, 2024, today));
        assert!(validate_expiry(2, 2024, today));
    }

    #[test]
    fn expiry_rejects_invalid_month() {
        let today = date(2024, 1, 1);
        assert!(!validate_expiry(0, 2030, today));
        assert!(!validate_expiry(13, 2030, today));
    }

    #[test]
    fn expiry_year_window() {
        let today = date(2024, 6, 15);
        assert!(expiry_year_in_range(2024, today));
        assert!(expiry_year_in_range(2034, today));
        assert!(!expiry_year_in_range(2023, today));
        assert!(!expiry_year_in_range(2035, today));
    }

    /// Compute the Luhn check digit for a digit prefix.
    fn luhn_check_digit(prefix: &[u32]) -> u32 {
        let mut sum = 0;
        let mut double = true;
        for &d in prefix.iter().rev() {
            let mut digit = d;
            if double {
                digit *= 2;
                if digit > 9 {
                    digit -= 9;
                }
            }
            sum += digit;
            double = !double;
        }
        (10 - sum % 10) % 10
    }

    proptest! {
        #[test]
        fn numbers_with_computed_check_digit_validate(
            prefix in prop::collection::vec(0u32..10, 12..=18)
        ) {
            let check = luhn_check_digit(&prefix);
            let number: String = prefix
                .iter()
                .chain(std::iter::once(&check))
                .map(|n| char::from_digit(*n, 10).unwrap())
                .collect();
            prop_assert!(validate_card_number(&number));
        }

        #[test]
        fn bumping_the_check_digit_invalidates(
            prefix in prop::collection::vec(0u32..10, 12..=18)
        ) {
            let check = luhn_check_digit(&prefix);
            let number: String = prefix
                .iter()
                .chain(std::iter::once(&((check + 1) % 10)))
                .map(|n| char::from_digit(*n, 10).unwrap())
                .collect();
            prop_assert!(!validate_card_number(&number));
        }
    }
}
