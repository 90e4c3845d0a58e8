//! Donation amount value object.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Plain decimal: digits with an optional fraction of one or two digits.
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("amount pattern is valid"));

/// Reasons an amount is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount is required")]
    Missing,

    #[error("Please enter a valid amount")]
    Malformed,

    #[error("Minimum donation is R{minimum}")]
    BelowMinimum { minimum: String },
}

/// A donation amount in rand, at least the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DonationAmount(Decimal);

impl DonationAmount {
    /// Parses donor input and enforces the minimum.
    ///
    /// Input must be a plain decimal; signs, exponents, separators and more
    /// than two fraction digits are rejected rather than coerced.
    pub fn parse(raw: &str, minimum: Decimal) -> Result<Self, AmountError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Missing);
        }
        if !AMOUNT_PATTERN.is_match(trimmed) {
            return Err(AmountError::Malformed);
        }
        let value = Decimal::from_str(trimmed).map_err(|_| AmountError::Malformed)?;
        if value < minimum {
            return Err(AmountError::BelowMinimum {
                minimum: format_two_places(minimum),
            });
        }
        Ok(Self(value))
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Gateway representation with exactly two decimal places.
    pub fn to_gateway_string(&self) -> String {
        format_two_places(self.0)
    }
}

impl fmt::Display for DonationAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_gateway_string())
    }
}

fn format_two_places(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
