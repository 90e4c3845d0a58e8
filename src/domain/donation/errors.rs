//! Donation preparation errors.

use thiserror::Error;

use super::FieldErrors;

/// Errors raised while preparing a donation for the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DonationError {
    #[error("Donation form is invalid")]
    Validation(FieldErrors),
}

impl DonationError {
    /// Field errors to report back to the donor.
    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            DonationError::Validation(errors) => errors,
        }
    }
}

impl From<FieldErrors> for DonationError {
    fn from(errors: FieldErrors) -> Self {
        DonationError::Validation(errors)
    }
}
