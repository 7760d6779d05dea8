//! Display formatting for amounts.

/// Thousands separator used by the Swiss-German number format.
pub const GROUP_SEPARATOR: char = '’';

/// Format `amount` the way the Swiss-German locale prints currencies:
/// code, space, grouped integer part, two decimals.
///
/// An empty code prints the bare number.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let number = format_grouped(amount);
    let code = currency.trim();
    if code.is_empty() {
        number
    } else {
        format!("{} {}", code.to_uppercase(), number)
    }
}

/// Two decimals with grouped thousands, e.g. `-1’234.50`.
pub fn format_grouped(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    // -0.00 prints as 0.00
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}
