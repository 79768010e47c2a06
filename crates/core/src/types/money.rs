//! Money amounts using decimal arithmetic.
//!
//! Prices and order totals are `rust_decimal::Decimal` values persisted as
//! plain JSON numbers. Reading is lenient: a numeric string is accepted and
//! anything that is not a number at all counts as zero, so a single bad
//! amount never discards a whole collection.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use tracing::warn;

/// Format an amount for display (e.g., `$129.90`).
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

/// Coerce an arbitrary JSON value into an amount, defaulting to zero.
///
/// A number outside the `Decimal` range also becomes zero and is logged.
#[must_use]
pub fn coerce_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_number(&n.to_string()).unwrap_or_else(|| {
            warn!(amount = %n, "Amount out of range, reading as zero");
            Decimal::ZERO
        }),
        Value::String(s) => parse_number(s.trim()).unwrap_or_default(),
        Value::Bool(true) => Decimal::ONE,
        _ => Decimal::ZERO,
    }
}

fn parse_number(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Serde adapter: serialize as a JSON number, deserialize leniently.
///
/// Use with `#[serde(with = "backoffice_core::money::lenient")]`.
pub mod lenient {
    use super::{Decimal, Deserialize, Deserializer, Serializer, Value, coerce_amount};

    /// Serialize a `Decimal` as a JSON number.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    /// Deserialize any JSON value into a `Decimal`, coercing non-numbers to zero.
    ///
    /// # Errors
    ///
    /// Only fails if the input is not valid JSON at all.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_amount(&value))
    }
}
