//! Monetary amount helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal`; stored amounts arrive as decimal strings.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a stored decimal-string amount.
///
/// Returns `None` for missing, blank or non-numeric input. Callers decide what a
/// missing amount means; the balance aggregation treats it as zero.
#[must_use]
pub fn parse_amount_lenient(raw: Option<&str>) -> Option<Decimal> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Formats an amount as display currency text.
///
/// The magnitude is always shown as an absolute value; the sign is conveyed by
/// the caller through styling, never as a minus sign in the text.
#[must_use]
pub fn format_currency(amount: Decimal, symbol: &str, decimal_places: u32) -> String {
    let magnitude = amount.abs().round_dp(decimal_places);
    let precision = decimal_places as usize;
    format!("{symbol}{magnitude:.precision$}")
}
