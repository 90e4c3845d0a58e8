//! PrepareDonationHandler - Validates a donation form and builds the gateway submission.

use rust_decimal::Decimal;

use crate::domain::donation::{
    prepare_gateway_fields, submit, DonationError, DonationForm, GatewaySettings,
    GatewaySubmission, PaymentReference,
};

/// Command to prepare a donation for the gateway.
#[derive(Debug, Clone)]
pub struct PrepareDonationCommand {
    pub form: DonationForm,
}

/// Result of preparing a donation.
#[derive(Debug, Clone)]
pub struct PrepareDonationResult {
    pub reference: PaymentReference,
    pub submission: GatewaySubmission,
}

/// Handler that turns donor input into a gateway navigation intent.
///
/// Nothing is submitted unless validation passes.
pub struct PrepareDonationHandler {
    settings: GatewaySettings,
    minimum_amount: Decimal,
}

impl PrepareDonationHandler {
    pub fn new(settings: GatewaySettings, minimum_amount: Decimal) -> Self {
        Self {
            settings,
            minimum_amount,
        }
    }

    pub fn handle(&self, cmd: PrepareDonationCommand) -> Result<PrepareDonationResult, DonationError> {
        let validated = cmd.form.validate(self.minimum_amount).map_err(|errors| {
            tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "Donation form rejected");
            DonationError::from(errors)
        })?;

        let (reference, fields) = prepare_gateway_fields(&validated, &self.settings);

        tracing::info!(
            payment_reference = %reference,
            amount = %validated.amount,
            frequency = %validated.frequency,
            anonymous = validated.anonymous,
            "Donation prepared"
        );

        Ok(PrepareDonationResult {
            reference,
            submission: submit(fields, &self.settings),
        })
    }
}
