//! Numeric coercion and result formatting.
//!
//! The engine keeps its operands as strings exactly as they were typed.
//! These helpers turn them into `f64` values and turn results back into
//! display strings without ever failing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest numeric prefix: optional sign, then `Infinity` or a decimal
    /// literal with an optional exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// Parse the numeric prefix of `input`, coercing anything unparseable to `0`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"1.2.3"`
/// is `1.2` and `"Infinity5"` is infinite. An empty string, a lone sign or
/// anything that would be NaN yields `0`.
pub fn parse_numeric_or_zero(input: &str) -> f64 {
    let Some(prefix) = NUMERIC_PREFIX.find(input.trim_start()) else {
        return 0.0;
    };
    let literal = prefix.as_str();

    let value = if literal.ends_with("Infinity") {
        if literal.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        literal.parse::<f64>().unwrap_or(0.0)
    };

    if value.is_nan() { 0.0 } else { value }
}

/// Format a result the way it appears in the input buffer and in history.
///
/// Uses the shortest digit string that round-trips, laid out in plain
/// decimal for exponents in `(-7, 21]` and in exponent form (`1e+21`,
/// `1.5e-7`) otherwise. Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "3.0000000000000004e-1".
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    // value = 0.d1d2...dk * 10^n
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    }
}
