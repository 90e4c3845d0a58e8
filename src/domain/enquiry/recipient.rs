//! Recipient policy for relayed enquiries.

/// Decides where an application email may be sent.
///
/// A client-supplied recipient is honoured only when it appears in the
/// allow-list; anything else goes to the default recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientPolicy {
    default_recipient: String,
    allowed: Vec<String>,
}

impl RecipientPolicy {
    pub fn new<I, S>(default_recipient: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_recipient: default_recipient.into(),
            allowed: allowed
                .into_iter()
                .map(|a| a.into().trim().to_ascii_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// Policy that only ever sends to the default recipient.
    pub fn default_only(default_recipient: impl Into<String>) -> Self {
        Self::new(default_recipient, Vec::<String>::new())
    }

    pub fn default_recipient(&self) -> &str {
        &self.default_recipient
    }

    /// Returns true if `address` may be used as a recipient.
    pub fn allows(&self, address: &str) -> bool {
        let address = address.trim();
        address.eq_ignore_ascii_case(&self.default_recipient)
            || self.allowed.iter().any(|a| a == &address.to_ascii_lowercase())
    }

    /// The recipient to use for a requested address.
    pub fn resolve<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested.map(str::trim).filter(|to| !to.is_empty()) {
            Some(to) if self.allows(to) => to,
            _ => &self.default_recipient,
        }
    }
}
