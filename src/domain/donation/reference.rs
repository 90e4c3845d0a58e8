//! Merchant payment reference.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

const REFERENCE_PREFIX: &str = "MSI-";

/// Last millisecond value handed out; references never repeat within a process.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Unique reference sent to the gateway as `m_payment_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentReference(String);

impl PaymentReference {
    /// Generates a fresh reference from the current time.
    ///
    /// Two calls in the same millisecond still yield distinct values.
    pub fn generate() -> Self {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut last = LAST_ISSUED.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_ISSUED.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return Self(format!("{}{}", REFERENCE_PREFIX, next)),
                Err(current) => last = current,
            }
        }
    }

    /// Wraps an existing reference, e.g. one echoed back by the gateway.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
