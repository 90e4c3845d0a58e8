//! Gateway field assembly.
//!
//! Builds the ordered key/value set posted to the PayFast process endpoint.
//! Order matters: it is the order the fields appear in the rendered form.

use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{PaymentReference, ValidatedDonation};

/// PayFast subscription type for recurring billing.
const SUBSCRIPTION_TYPE_RECURRING: &str = "1";

/// PayFast frequency code for monthly billing.
const FREQUENCY_MONTHLY: &str = "3";

/// PayFast cycle count meaning "until cancelled".
const CYCLES_UNLIMITED: &str = "0";

const ITEM_NAME_PREFIX: &str = "MSI Donation";

/// Merchant settings needed to build gateway fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    pub merchant_id: String,
    pub merchant_key: String,
    pub return_url: String,
    pub cancel_url: String,
    pub notify_url: String,
    pub organisation_name: String,
    pub process_url: String,
}

/// Ordered gateway key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayFields(Vec<(String, String)>);

impl GatewayFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field; keys are expected to be unique.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for GatewayFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Builds gateway fields with a fresh reference and today's date.
pub fn prepare_gateway_fields(
    validated: &ValidatedDonation,
    settings: &GatewaySettings,
) -> (PaymentReference, GatewayFields) {
    let reference = PaymentReference::generate();
    let fields = build_gateway_fields(validated, settings, &reference, Utc::now().date_naive());
    (reference, fields)
}

/// Builds gateway fields for a known reference and billing date origin.
///
/// Deterministic for the same inputs. Subscription fields are present only
/// for monthly donations.
pub fn build_gateway_fields(
    validated: &ValidatedDonation,
    settings: &GatewaySettings,
    reference: &PaymentReference,
    today: NaiveDate,
) -> GatewayFields {
    let amount = validated.amount.to_gateway_string();
    let mut fields = GatewayFields::new();

    fields.push("merchant_id", &settings.merchant_id);
    fields.push("merchant_key", &settings.merchant_key);
    fields.push("return_url", &settings.return_url);
    fields.push("cancel_url", &settings.cancel_url);
    fields.push("notify_url", &settings.notify_url);
    fields.push("m_payment_id", reference.as_str());
    fields.push("amount", &amount);
    fields.push("item_name", item_name(validated));
    fields.push("item_description", item_description(settings));
    fields.push("email_address", &validated.donor.email);

    if !validated.anonymous {
        if let Some(first_name) = &validated.donor.first_name {
            fields.push("name_first", first_name);
        }
        if let Some(last_name) = &validated.donor.last_name {
            fields.push("name_last", last_name);
        }
        if let Some(phone) = &validated.donor.phone {
            fields.push("cell_number", phone);
        }
    }

    if validated.frequency.is_recurring() {
        fields.push("subscription_type", SUBSCRIPTION_TYPE_RECURRING);
        fields.push(
            "billing_date",
            next_billing_date(today).format("%Y-%m-%d").to_string(),
        );
        fields.push("recurring_amount", &amount);
        fields.push("frequency", FREQUENCY_MONTHLY);
        fields.push("cycles", CYCLES_UNLIMITED);
    }

    fields
}

/// First day of the month after `today`.
pub fn next_billing_date(today: NaiveDate) -> NaiveDate {
    let first_of_month = today - Days::new(u64::from(today.day0()));
    first_of_month
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX)
}

fn item_name(validated: &ValidatedDonation) -> String {
    let mut name = format!("{} - {}", ITEM_NAME_PREFIX, validated.frequency.label());
    if validated.anonymous {
        name.push_str(" (Anonymous)");
    }
    name
}

fn item_description(settings: &GatewaySettings) -> String {
    format!("Donation to {}", settings.organisation_name)
}
