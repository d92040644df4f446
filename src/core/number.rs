//! # Number Rendering
//!
//! Formats `f64` values for result lines.
//!
//! Whole numbers keep a trailing `.0`, magnitudes outside `[1e-3, 1e7)` switch
//! to `d.dddE<exp>` notation, and non-finite values render as `NaN`,
//! `Infinity` or `-Infinity`.

/// Lower bound (inclusive) of the plain-decimal range
const DECIMAL_MIN: f64 = 1e-3;

/// Upper bound (exclusive) of the plain-decimal range
const DECIMAL_MAX: f64 = 1e7;

/// Render a double for display
pub fn format_double(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        let text = if x > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = x.abs();
    if x == 0.0 || (DECIMAL_MIN..DECIMAL_MAX).contains(&magnitude) {
        // Debug keeps the shortest round-trip digits and always has a fraction in this range
        return format!("{:?}", x);
    }

    scientific(x)
}

fn scientific(x: f64) -> String {
    let raw = format!("{:e}", x);
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => (raw.as_str(), "0"),
    };

    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}
