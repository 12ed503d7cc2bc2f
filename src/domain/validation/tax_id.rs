//! Brazilian tax id (CPF/CNPJ) checksum validation.
//!
//! Both documents carry two check digits computed with weighted sums mod 11.
//! Sequences of a single repeated digit pass the arithmetic but are reserved
//! values, so they are rejected explicitly.

use super::format::digits;

/// Validate a CPF or CNPJ, deciding by digit count after normalization.
///
/// 11 digits are checked as CPF, 14 as CNPJ; any other length is invalid.
pub fn validate_tax_id(value: &str) -> bool {
    let cleaned = digits(value);
    match cleaned.len() {
        11 => validate_cpf(value),
        14 => validate_cnpj(value),
        _ => false,
    }
}

/// Validate an 11-digit CPF (individual taxpayer id).
pub fn validate_cpf(value: &str) -> bool {
    let cleaned = digits(value);
    if cleaned.len() != 11 || all_same_digit(&cleaned) {
        return false;
    }
    let d: Vec<u32> = cleaned.chars().filter_map(|c| c.to_digit(10)).collect();

    // First check digit: weights 10..2 over the first nine digits.
    let sum: u32 = d[..9]
        .iter()
        .enumerate()
        .map(|(i, &n)| n * (10 - i as u32))
        .sum();
    if check_digit_cpf(sum) != d[9] {
        return false;
    }

    // Second check digit: weights 11..2 over the first ten digits.
    let sum: u32 = d[..10]
        .iter()
        .enumerate()
        .map(|(i, &n)| n * (11 - i as u32))
        .sum();
    check_digit_cpf(sum) == d[10]
}

/// Validate a 14-digit CNPJ (company taxpayer id).
pub fn validate_cnpj(value: &str) -> bool {
    let cleaned = digits(value);
    if cleaned.len() != 14 || all_same_digit(&cleaned) {
        return false;
    }
    let d: Vec<u32> = cleaned.chars().filter_map(|c| c.to_digit(10)).collect();

    check_digit_cnpj(&d[..12]) == d[12] && check_digit_cnpj(&d[..13]) == d[13]
}

fn check_digit_cpf(sum: u32) -> u32 {
    let digit = 11 - (sum % 11);
    if digit >= 10 {
        0
    } else {
        digit
    }
}

/// CNPJ weights start at `len - 7` and cycle back to 9 after reaching 2.
fn check_digit_cnpj(body: &[u32]) -> u32 {
    let mut pos = body.len() as u32 - 7;
    let mut sum = 0;
    for &n in body {
        sum += n * pos;
        pos = if pos <= 2 { 9 } else { pos - 1 };
    }
    let rem = sum % 11;
    if rem < 2 {
        0
    } else {
        11 - rem
    }
}

fn all_same_digit(cleaned: &str) -> bool {
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}
