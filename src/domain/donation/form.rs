//! Donation form input and validation.
//!
//! `validate` checks every field independently and reports all failures at
//! once, keyed by field name, so the donor sees every problem in one pass.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::{DonationAmount, DonationFrequency};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static CELL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("cell pattern is valid"));

/// Raw donation form as submitted by the donor.
///
/// Accepts both URL-encoded form posts and JSON bodies. Every field is
/// optional at this stage; `validate` decides what is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationForm {
    #[serde(default, alias = "first_name")]
    pub name_first: String,
    #[serde(default, alias = "last_name")]
    pub name_last: String,
    #[serde(default, alias = "email")]
    pub email_address: String,
    #[serde(default, alias = "email_confirm")]
    pub email_address_confirm: String,
    #[serde(default, alias = "phone")]
    pub cell_number: String,
    #[serde(default, deserialize_with = "deserialize_text_or_number")]
    pub amount: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_anonymous: bool,
}

/// Field-keyed validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("donation form has {} invalid field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Donor identity carried to the gateway.
///
/// Names are absent for anonymous donations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

/// A donation that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDonation {
    pub donor: Donor,
    pub amount: DonationAmount,
    pub frequency: DonationFrequency,
    pub anonymous: bool,
}

impl DonationForm {
    /// Validates the form against the configured minimum amount.
    pub fn validate(&self, minimum: Decimal) -> Result<ValidatedDonation, FieldErrors> {
        validate(self, minimum)
    }
}

/// Validates a donation form, collecting every field error.
pub fn validate(form: &DonationForm, minimum: Decimal) -> Result<ValidatedDonation, FieldErrors> {
    let mut errors = FieldErrors::new();

    let first_name = form.name_first.trim();
    let last_name = form.name_last.trim();
    if !form.is_anonymous {
        if first_name.is_empty() {
            errors.insert("name_first", "First name is required");
        }
        if last_name.is_empty() {
            errors.insert("name_last", "Last name is required");
        }
    }

    if form.email_address.is_empty() {
        errors.insert("email_address", "Email is required");
    } else if !EMAIL_PATTERN.is_match(&form.email_address) {
        errors.insert("email_address", "Please enter a valid email address");
    }

    if form.email_address_confirm.is_empty() && form.email_address.is_empty() {
        errors.insert("email_address_confirm", "Please confirm your email");
    } else if form.email_address_confirm != form.email_address {
        errors.insert("email_address_confirm", "Emails do not match");
    }

    let phone: String = form.cell_number.chars().filter(|c| !c.is_whitespace()).collect();
    if !phone.is_empty() && !CELL_PATTERN.is_match(&phone) {
        errors.insert("cell_number", "Please enter a valid 10-digit cell number");
    }

    let amount = match DonationAmount::parse(&form.amount, minimum) {
        Ok(amount) => Some(amount),
        Err(e) => {
            errors.insert("amount", e.to_string());
            None
        }
    };

    let frequency = match form.frequency.parse::<DonationFrequency>() {
        Ok(frequency) => Some(frequency),
        Err(_) => {
            errors.insert("frequency", "Please choose a donation frequency");
            None
        }
    };

    match (amount, frequency) {
        (Some(amount), Some(frequency)) if errors.is_empty() => {
            let (first_name, last_name) = if form.is_anonymous {
                (None, None)
            } else {
                (Some(first_name.to_string()), Some(last_name.to_string()))
            };
            Ok(ValidatedDonation {
                donor: Donor {
                    first_name,
                    last_name,
                    email: form.email_address.clone(),
                    phone: (!phone.is_empty()).then_some(phone),
                },
                amount,
                frequency,
                anonymous: form.is_anonymous,
            })
        }
        _ => Err(errors),
    }
}

/// Accepts a JSON string or number, or a URL-encoded text value.
fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}

/// Accepts a JSON boolean or an HTML checkbox value ("on", "true", "1").
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "on" | "true" | "1" | "yes"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ═══════════════════════════════════════════════════════════════════════
    // Test Fixtures
    // ═══════════════════════════════════════════════════════════════════════

    fn minimum() -> Decimal {
        Decimal::new(500, 2)
    }

    fn valid_form() -> DonationForm {
        DonationForm {
            name_first: "Thandi".to_string(),
            name_last: "Nkosi".to_string(),
            email_address: "thandi@example.com".to_string(),
            email_address_confirm: "thandi@example.com".to_string(),
            cell_number: "0821234567".to_string(),
            amount: "100".to_string(),
            frequency: "once-off".to_string(),
            is_anonymous: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Happy Path
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn valid_form_produces_validated_donation() {
        let validated = validate(&valid_form(), minimum()).unwrap();

        assert_eq!(validated.donor.first_name.as_deref(), Some("Thandi"));
        assert_eq!(validated.donor.last_name.as_deref(), Some("Nkosi"));
        assert_eq!(validated.donor.email, "thandi@example.com");
        assert_eq!(validated.donor.phone.as_deref(), Some("0821234567"));
        assert_eq!(validated.amount.to_gateway_string(), "100.00");
        assert_eq!(validated.frequency, DonationFrequency::OnceOff);
        assert!(!validated.anonymous);
    }

    #[test]
    fn names_are_trimmed() {
        let mut form = valid_form();
        form.name_first = "  Thandi ".to_string();
        let validated = form.validate(minimum()).unwrap();
        assert_eq!(validated.donor.first_name.as_deref(), Some("Thandi"));
    }

    #[test]
    fn phone_is_optional() {
        let mut form = valid_form();
        form.cell_number = String::new();
        let validated = validate(&form, minimum()).unwrap();
        assert_eq!(validated.donor.phone, None);
    }

    #[test]
    fn phone_spaces_are_ignored() {
        let mut form = valid_form();
        form.cell_number = "082 123 4567".to_string();
        let validated = validate(&form, minimum()).unwrap();
        assert_eq!(validated.donor.phone.as_deref(), Some("0821234567"));
    }

    #[test]
    fn anonymous_donation_needs_no_names() {
        let mut form = valid_form();
        form.name_first = String::new();
        form.name_last = String::new();
        form.is_anonymous = true;

        let validated = validate(&form, minimum()).unwrap();
        assert!(validated.anonymous);
        assert_eq!(validated.donor.first_name, None);
        assert_eq!(validated.donor.last_name, None);
    }

    #[test]
    fn anonymous_donation_drops_supplied_names() {
        let mut form = valid_form();
        form.is_anonymous = true;
        let validated = validate(&form, minimum()).unwrap();
        assert_eq!(validated.donor.first_name, None);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Field Errors
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&DonationForm::default(), minimum()).unwrap_err();

        assert_eq!(errors.get("name_first"), Some("First name is required"));
        assert_eq!(errors.get("name_last"), Some("Last name is required"));
        assert_eq!(errors.get("email_address"), Some("Email is required"));
        assert_eq!(errors.get("email_address_confirm"), Some("Please confirm your email"));
        assert_eq!(errors.get("amount"), Some("Amount is required"));
        assert_eq!(errors.get("frequency"), Some("Please choose a donation frequency"));
        assert!(!errors.contains("cell_number"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut form = valid_form();
        form.email_address_confirm = "other@example.com".to_string();
        let errors = validate(&form, minimum()).unwrap_err();
        assert_eq!(errors.get("email_address_confirm"), Some("Emails do not match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn missing_confirmation_is_a_mismatch() {
        let mut form = valid_form();
        form.email_address_confirm = String::new();
        let errors = validate(&form, minimum()).unwrap_err();
        assert_eq!(errors.get("email_address_confirm"), Some("Emails do not match"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = valid_form();
        form.email_address = "not-an-email".to_string();
        form.email_address_confirm = "not-an-email".to_string();
        let errors = validate(&form, minimum()).unwrap_err();
        assert_eq!(errors.get("email_address"), Some("Please enter a valid email address"));
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut form = valid_form();
        form.cell_number = "08212".to_string();
        let errors = validate(&form, minimum()).unwrap_err();
        assert_eq!(errors.get("cell_number"), Some("Please enter a valid 10-digit cell number"));
    }

    #[test]
    fn amount_below_minimum_is_rejected() {
        let mut form = valid_form();
        form.amount = "4.99".to_string();
        let errors = validate(&form, minimum()).unwrap_err();
        assert_eq!(errors.get("amount"), Some("Minimum donation is R5.00"));
    }

    #[test]
    fn unknown_frequency_is_rejected() {
        let mut form = valid_form();
        form.frequency = "weekly".to_string();
        let errors = validate(&form, minimum()).unwrap_err();
        assert!(errors.contains("frequency"));
    }

    #[test]
    fn errors_do_not_short_circuit() {
        let mut form = valid_form();
        form.name_first = String::new();
        form.amount = "abc".to_string();
        form.email_address_confirm = "x@example.com".to_string();

        let errors = validate(&form, minimum()).unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["amount", "email_address_confirm", "name_first"]);
    }

    #[test]
    fn field_errors_serialize_as_flat_map() {
        let mut errors = FieldErrors::new();
        errors.insert("amount", "Amount is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"amount": "Amount is required"}));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Deserialization
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn deserializes_url_encoded_form_with_checkbox() {
        let body = "name_first=A&name_last=B&email_address=a%40b.co&email_address_confirm=a%40b.co&amount=50&frequency=monthly&is_anonymous=on";
        let form: DonationForm = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(form.email_address, "a@b.co");
        assert_eq!(form.amount, "50");
        assert!(form.is_anonymous);
    }

    #[test]
    fn deserializes_short_field_aliases() {
        let body = "first_name=A&last_name=B&email=a%40b.co&email_confirm=a%40b.co&phone=0821234567&amount=50&frequency=monthly";
        let form: DonationForm = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(form.name_first, "A");
        assert_eq!(form.email_address_confirm, "a@b.co");
        assert_eq!(form.cell_number, "0821234567");
        assert!(!form.is_anonymous);
    }

    #[test]
    fn deserializes_json_with_numeric_amount() {
        let json = r#"{"name_first":"A","name_last":"B","email_address":"a@b.co","email_address_confirm":"a@b.co","amount":75,"frequency":"once-off","is_anonymous":true}"#;
        let form: DonationForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.amount, "75");
        assert!(form.is_anonymous);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Properties
    // ═══════════════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn differing_confirmation_is_always_rejected(
            email in "[a-z]{1,8}@[a-z]{1,8}\\.com",
            confirm in "[a-z]{1,8}@[a-z]{1,8}\\.org",
            amount in "[0-9]{1,4}(\\.[0-9]{2})?",
        ) {
            let mut form = valid_form();
            form.email_address = email;
            form.email_address_confirm = confirm;
            form.amount = amount;
            let errors = validate(&form, minimum()).unwrap_err();
            prop_assert_eq!(errors.get("email_address_confirm"), Some("Emails do not match"));
        }

        #[test]
        fn amounts_below_minimum_never_validate(cents in 0u32..500) {
            let mut form = valid_form();
            form.amount = format!("{}.{:02}", cents / 100, cents % 100);
            let errors = validate(&form, minimum()).unwrap_err();
            prop_assert!(errors.contains("amount"));
        }
    }
}
