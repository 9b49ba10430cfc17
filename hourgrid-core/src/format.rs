/// Rounds a coordinate to 6 decimal places.
pub fn round_f64(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Formats a coordinate with up to 6 decimal places, removing trailing zeros.
///
/// Negative zero is written as `0` so path data stays stable.
///
/// # Examples
/// ```rust
/// use hourgrid_core::format::format_coord;
/// assert_eq!(format_coord(1.0), "1");
/// assert_eq!(format_coord(1.2345), "1.2345");
/// assert_eq!(format_coord(-0.0), "0");
/// assert_eq!(format_coord(57.99999999999999), "58");
/// ```
pub fn format_coord(value: f64) -> String {
    let mut text = format!("{:.6}", round_f64(value));
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}
