//! Pure input validators and formatting helpers.
//!
//! Everything in this module is deterministic and free of I/O. Validators
//! return boolean outcomes; callers attach field-specific error messages.
//! Formatting helpers produce display masks whose digit content is identical
//! to what the validators consume, so normalization is idempotent.

mod card;
mod format;
mod tax_id;

pub use card::{
    expiry_year_in_range, validate_card_number, validate_expiry, MAX_EXPIRY_YEARS_AHEAD,
};
pub use format::{digits, format_card_number, format_expiry, format_phone, format_tax_id};
pub use tax_id::{validate_cnpj, validate_cpf, validate_tax_id};

/// Lightweight e-mail shape check: non-empty local part and a dotted domain.
///
/// This is intentionally permissive; the gateway performs its own
/// deliverability checks.
pub fn validate_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// A phone number is acceptable with 10 digits (landline) or 11 (mobile).
pub fn validate_phone(value: &str) -> bool {
    matches!(digits(value).len(), 10 | 11)
}
