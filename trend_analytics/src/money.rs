//! Currency amount parsing and display formatting
//!
//! Amounts round-trip through user-facing text: the dashboard renders
//! `$1,234.56` style strings and re-parses them from form fields and CSV
//! exports. Parsing is strict about signs but tolerant of the usual
//! currency decoration.

use crate::error::{AnalyticsError, Result};

/// Parse a currency amount from its display form
///
/// Accepts an optional sign, an optional `$` symbol, thousands separators
/// and a decimal fraction, with surrounding whitespace ignored. The sign
/// may sit before or after the `$`, but not both.
///
/// # Arguments
///
/// * `input` - Amount text, e.g. `"$1,234.56"`, `"-$500"`, `"42.5"`
///
/// # Returns
///
/// * `Result<f64>` - The parsed amount, or `ParseError` for malformed text
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalyticsError::ParseError(
            "Amount string is empty".to_string(),
        ));
    }

    let mut rest = trimmed;
    let mut sign = 1.0;
    let mut signed = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        sign = -1.0;
        signed = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        signed = true;
        rest = stripped;
    }

    rest = rest.strip_prefix('$').unwrap_or(rest);
    if signed && (rest.starts_with('-') || rest.starts_with('+')) {
        return Err(AnalyticsError::ParseError(format!(
            "Malformed amount: {}",
            input
        )));
    }

    let cleaned: String = rest.chars().filter(|&c| c != ',').collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| AnalyticsError::ParseError(format!("Malformed amount: {}", input)))?;

    if !value.is_finite() {
        return Err(AnalyticsError::ParseError(format!(
            "Amount is not a finite number: {}",
            input
        )));
    }

    Ok(sign * value)
}

/// Format an amount in `$1,234.56` style
///
/// Two decimals, commas every three integer digits, and the sign ahead of
/// the currency symbol for negative amounts.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}${}.{}",
        if negative { "-" } else { "" },
        grouped,
        frac_part
    )
}

/// Format a percentage delta with one decimal and an explicit sign
pub fn format_percent(value: f64) -> String {
    format!("{:+.1}%", value)
}
