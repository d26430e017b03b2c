//! Price presentation.

/// Render `amount` with thousands separators and a leading currency symbol.
///
/// `format_price(89_900, "€")` yields `€89,900`.
pub fn format_price(amount: u64, symbol: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}", symbol, grouped)
}
