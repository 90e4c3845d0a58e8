//! Inbound notification payload.

use super::NotificationError;

/// Ordered key/value pairs as the gateway posted them.
///
/// Order is preserved because the signature is computed over the fields in
/// the order they were received. A repeated key keeps the position of its
/// first occurrence and the value of its last, so lookups and the signature
/// always see the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPayload {
    fields: Vec<(String, String)>,
}

impl NotificationPayload {
    /// Builds a payload from pairs in received order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut payload = Self::default();
        for (key, value) in pairs {
            payload.insert(key.into(), value.into());
        }
        payload
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Malformed` if the body is not UTF-8 or not
    /// valid form data. Lossy decoding would sign different bytes than were sent.
    pub fn parse_form(body: &[u8]) -> Result<Self, NotificationError> {
        let body = std::str::from_utf8(body)
            .map_err(|e| NotificationError::Malformed(format!("body is not UTF-8: {}", e)))?;
        let fields: Vec<(String, String)> = serde_urlencoded::from_str(body)
            .map_err(|e| NotificationError::Malformed(e.to_string()))?;
        Ok(Self::from_pairs(fields))
    }

    fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn signature(&self) -> Option<&str> {
        self.get("signature")
    }

    pub fn payment_reference(&self) -> Option<&str> {
        self.get("m_payment_id")
    }

    pub fn provider_payment_id(&self) -> Option<&str> {
        self.get("pf_payment_id")
    }

    pub fn payment_status(&self) -> Option<&str> {
        self.get("payment_status")
    }

    /// Gross amount, falling back to `amount` when the gateway omits it.
    pub fn amount(&self) -> Option<&str> {
        self.get("amount_gross").or_else(|| self.get("amount"))
    }

    pub fn email_address(&self) -> Option<&str> {
        self.get("email_address")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_preserves_received_order() {
        let payload =
            NotificationPayload::parse_form(b"m_payment_id=MSI-1&amount=50.00&email_address=a%40b.com")
                .unwrap();

        let keys: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["m_payment_id", "amount", "email_address"]);
        assert_eq!(payload.email_address(), Some("a@b.com"));
    }

    #[test]
    fn parse_form_decodes_plus_as_space() {
        let payload = NotificationPayload::parse_form(b"item_name=MSI+Donation").unwrap();
        assert_eq!(payload.get("item_name"), Some("MSI Donation"));
    }

    #[test]
    fn parse_form_accepts_empty_body() {
        let payload = NotificationPayload::parse_form(b"").unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn repeated_key_keeps_first_position_and_last_value() {
        let payload = NotificationPayload::parse_form(
            b"m_payment_id=MSI-1&amount=50.00&email_address=a%40b.com&amount=5000.00",
        )
        .unwrap();

        let pairs: Vec<(&str, &str)> = payload.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("m_payment_id", "MSI-1"),
                ("amount", "5000.00"),
                ("email_address", "a@b.com"),
            ]
        );
        assert_eq!(payload.amount(), Some("5000.00"));
    }

    #[test]
    fn parse_form_rejects_invalid_utf8() {
        let result = NotificationPayload::parse_form(b"m_payment_id=MSI-1&name_first=\xff");
        assert!(matches!(result, Err(NotificationError::Malformed(_))));
    }

    #[test]
    fn amount_prefers_gross() {
        let payload =
            NotificationPayload::from_pairs([("amount", "50.00"), ("amount_gross", "52.00")]);
        assert_eq!(payload.amount(), Some("52.00"));

        let payload = NotificationPayload::from_pairs([("amount", "50.00")]);
        assert_eq!(payload.amount(), Some("50.00"));
    }

    #[test]
    fn accessors_read_gateway_fields() {
        let payload = NotificationPayload::from_pairs([
            ("m_payment_id", "MSI-1"),
            ("pf_payment_id", "1089250"),
            ("payment_status", "COMPLETE"),
            ("signature", "abc"),
        ]);
        assert_eq!(payload.payment_reference(), Some("MSI-1"));
        assert_eq!(payload.provider_payment_id(), Some("1089250"));
        assert_eq!(payload.payment_status(), Some("COMPLETE"));
        assert_eq!(payload.signature(), Some("abc"));
        assert_eq!(payload.len(), 4);
    }
}
