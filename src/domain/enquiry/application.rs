//! Volunteer and tutor application submissions.
//!
//! Applications arrive as a flat JSON object: an optional `to` recipient,
//! an `applicationType`, and any number of form fields. Field order is kept
//! so the email lists answers in the order the form asked them.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use super::{OutgoingMail, RecipientPolicy};
use crate::domain::foundation::html_escape;

/// An application form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSubmission {
    pub to: Option<String>,
    pub application_type: String,
    pub fields: Vec<(String, Value)>,
}

impl ApplicationSubmission {
    /// Application type with its first letter capitalised.
    pub fn display_type(&self) -> String {
        capitalize(&self.application_type)
    }

    pub fn subject(&self) -> String {
        format!("New {} Application from MSI Website", self.display_type())
    }

    /// HTML body listing each non-empty field under a title-cased label.
    pub fn html_body(&self) -> String {
        let mut html = format!("<h2>New {} Application</h2><div>", html_escape(&self.display_type()));
        for (key, value) in &self.fields {
            if let Some(text) = present_value(value) {
                html.push_str(&format!(
                    "<p><strong>{}:</strong> {}</p>",
                    html_escape(&title_case_key(key)),
                    html_escape(&text)
                ));
            }
        }
        html.push_str("</div>");
        html
    }

    pub fn text_body(&self) -> String {
        format!(
            "New {} application received. Please check the details in the HTML version.",
            self.application_type
        )
    }

    /// Formats the application as an email addressed per `recipients`.
    pub fn to_mail(&self, recipients: &RecipientPolicy) -> OutgoingMail {
        let to = recipients.resolve(self.to.as_deref());

        OutgoingMail {
            to: to.to_string(),
            subject: self.subject(),
            html: self.html_body(),
            text: self.text_body(),
            reply_to: None,
        }
    }
}

/// Converts a camelCase key into spaced Title Case, e.g. `firstName` -> `First Name`.
pub fn title_case_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    capitalize(spaced.trim_start())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text for a field value, or `None` when the value is empty, false, zero or null.
fn present_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some("Yes".to_string()),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(present_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

impl<'de> Deserialize<'de> for ApplicationSubmission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SubmissionVisitor;

        impl<'de> Visitor<'de> for SubmissionVisitor {
            type Value = ApplicationSubmission;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an application object with an applicationType")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut to = None;
                let mut application_type = None;
                let mut fields = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "to" => to = map.next_value::<Option<String>>()?,
                        "applicationType" => application_type = Some(map.next_value::<String>()?),
                        _ => {
                            let value = map.next_value::<Value>()?;
                            fields.push((key, value));
                        }
                    }
                }

                let application_type =
                    application_type.ok_or_else(|| de::Error::missing_field("applicationType"))?;

                Ok(ApplicationSubmission {
                    to,
                    application_type,
                    fields,
                })
            }
        }

        deserializer.deserialize_map(SubmissionVisitor)
    }
}
