//! Display masks and digit normalization.
//!
//! `digits` is the single normalization primitive: every mask below, fed back
//! through `digits`, yields exactly the digits it was built from.

/// Strip everything but ASCII digits.
pub fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a tax id: `000.000.000-00` for CPF, `00.000.000/0000-00` for CNPJ.
///
/// Inputs that are not exactly 11 or 14 digits long are returned digit-only
/// without a mask.
pub fn format_tax_id(value: &str) -> String {
    let d = digits(value);
    match d.len() {
        11 => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
        14 => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        ),
        _ => d,
    }
}

/// Mask a phone number: `(00) 0000-0000` or `(00) 00000-0000`.
pub fn format_phone(value: &str) -> String {
    let d = digits(value);
    match d.len() {
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        _ => d,
    }
}

/// Group a card number into blocks of four digits.
pub fn format_card_number(value: &str) -> String {
    let d = digits(value);
    d.as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an expiry entry as `MM/YY`.
pub fn format_expiry(value: &str) -> String {
    let d = digits(value);
    if d.len() >= 2 {
        let months = &d[..2];
        let years = &d[2..d.len().min(4)];
        if years.is_empty() {
            months.to_string()
        } else {
            format!("{months}/{years}")
        }
    } else {
        d
    }
}
