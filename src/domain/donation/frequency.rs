//! Donation frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a donation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonationFrequency {
    /// Single payment.
    #[serde(rename = "once-off", alias = "one-time", alias = "once")]
    OnceOff,
    /// Recurring monthly subscription with no end date.
    #[serde(rename = "monthly")]
    Monthly,
}

impl DonationFrequency {
    /// Returns true if this frequency creates a gateway subscription.
    pub fn is_recurring(&self) -> bool {
        matches!(self, DonationFrequency::Monthly)
    }

    /// Label used in gateway item names.
    pub fn label(&self) -> &'static str {
        match self {
            DonationFrequency::OnceOff => "Once-off",
            DonationFrequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for DonationFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DonationFrequency::OnceOff => write!(f, "once-off"),
            DonationFrequency::Monthly => write!(f, "monthly"),
        }
    }
}

/// Error returned when a frequency name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown donation frequency: {0}")]
pub struct UnknownFrequency(pub String);

impl FromStr for DonationFrequency {
    type Err = UnknownFrequency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once-off" | "one-time" | "once" | "onceoff" => Ok(DonationFrequency::OnceOff),
            "monthly" => Ok(DonationFrequency::Monthly),
            other => Err(UnknownFrequency(other.to_string())),
        }
    }
}
