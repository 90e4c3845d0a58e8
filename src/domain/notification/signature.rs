//! PayFast notification signature verification.
//!
//! The gateway signs each notification with MD5 over the posted fields,
//! percent-encoded and joined in received order, with the merchant secret
//! appended. A notification is trusted only if the recomputed digest equals
//! the supplied `signature` exactly.

use md5::{Digest, Md5};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use super::{NotificationError, NotificationPayload};

/// Characters left unescaped, matching JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Verifier for gateway notification signatures.
///
/// Holds only the shared secret; verification is a pure function of the
/// payload.
#[derive(Clone)]
pub struct NotificationVerifier {
    secret: SecretString,
}

impl NotificationVerifier {
    /// Creates a verifier with the merchant's shared secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Returns true if the payload's signature matches.
    pub fn verify(&self, payload: &NotificationPayload) -> bool {
        self.check(payload).is_ok()
    }

    /// Verifies the payload, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// - `MissingSignature` - payload has no `signature` field
    /// - `InvalidSignature` - recomputed signature differs
    pub fn check(&self, payload: &NotificationPayload) -> Result<(), NotificationError> {
        let supplied = payload
            .signature()
            .ok_or(NotificationError::MissingSignature)?;

        let expected = compute_signature(payload, self.secret.expose_secret());

        if !constant_time_compare(expected.as_bytes(), supplied.as_bytes()) {
            return Err(NotificationError::InvalidSignature);
        }

        Ok(())
    }
}

impl std::fmt::Debug for NotificationVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationVerifier")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Joins every field except `signature` as `key=encoded(value)` with `&`.
pub fn canonical_string(payload: &NotificationPayload) -> String {
    payload
        .iter()
        .filter(|(key, _)| *key != "signature")
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, COMPONENT)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Lowercase hex MD5 of the canonical string followed by the secret.
pub fn compute_signature(payload: &NotificationPayload, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(canonical_string(payload).as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Appends a valid signature to `pairs` for use in test fixtures.
#[cfg(test)]
pub fn sign_test_payload(pairs: &[(&str, &str)], secret: &str) -> NotificationPayload {
    let unsigned = NotificationPayload::from_pairs(pairs.iter().copied());
    let signature = compute_signature(&unsigned, secret);
    let mut signed: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    signed.push(("signature".to_string(), signature));
    NotificationPayload::from_pairs(signed)
}
