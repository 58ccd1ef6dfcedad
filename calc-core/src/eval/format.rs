//! Conversion between display text and numbers

/// Format a finite number for the main display
///
/// Uses the shortest text that round-trips, drops a trailing `.0`, shows
/// negative zero as `0` and never switches to exponent notation, so the
/// result always lexes back as a numeral.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Parse the leading numeral of display text, ignoring anything after it
///
/// Accepts an optional sign followed by `12`, `12.`, `12.5` or `.5`.
/// Returns `None` when the text does not start with a numeral, which is
/// the case for every error sentinel.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    text[..end].trim_end_matches('.').parse::<f64>().ok()
}
