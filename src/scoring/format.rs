/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Price as shown to the user: always two decimals.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", round2(value))
}
