// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Amount and number handling.
//!
//! Chain amounts are arbitrary precision decimal strings on the wire; they are
//! held as `u128` here, with the sign carried separately by the operation
//! direction.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Failed to parse amount: '{0}'")]
    Parse(String),

    #[error("Amount overflow")]
    Overflow,
}

/// Parses an unsigned decimal amount. An empty string is zero.
pub fn parse_amount(value: &str) -> Result<u128, AmountError> {
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<u128>()
        .map_err(|_| AmountError::Parse(value.to_string()))
}

/// Parses a signed decimal amount into its sign and magnitude.
pub fn parse_signed_amount(value: &str) -> Result<(bool, u128), AmountError> {
    match value.strip_prefix('-') {
        Some(magnitude) => Ok((true, parse_amount(magnitude)?)),
        None => Ok((false, parse_amount(value)?)),
    }
}

/// Whether the value moves nothing: empty, exactly `"0"`, or negative.
///
/// Padded zeros such as `"00"` are not recognized.
pub fn is_zero_or_negative(value: &str) -> bool {
    value.is_empty() || value == "0" || value.starts_with('-')
}

/// Renders `amount` with a leading `-` when `negative`, as Rosetta expects.
pub fn format_signed(amount: u128, negative: bool) -> String {
    if negative && amount != 0 {
        format!("-{}", amount)
    } else {
        amount.to_string()
    }
}

pub fn checked_mul(a: u128, b: u128) -> Result<u128, AmountError> {
    a.checked_mul(b).ok_or(AmountError::Overflow)
}

/// Extracts an unsigned integer from a JSON number or a decimal string.
///
/// Returns `None` for anything else, including negative and fractional numbers.
pub fn extract_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extracts a float from a JSON number or a decimal string.
pub fn extract_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
