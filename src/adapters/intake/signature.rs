//! HMAC-SHA256 signing of outbound quote payloads.
//!
//! The header value has the form `t=<unix seconds>,v1=<hex digest>` where the
//! digest covers `"<t>.<body>"`. Checking the header is left to the intake
//! endpoint that holds the same secret.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use thiserror::Error;

/// Header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "X-Quote-Signature";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("Signing key rejected")]
    InvalidKey,
}

/// Signs payload bodies with a shared secret.
#[derive(Clone)]
pub struct PayloadSigner {
    secret: Secret<String>,
}

impl std::fmt::Debug for PayloadSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl PayloadSigner {
    pub fn new(secret: Secret<String>) -> Self {
        Self { secret }
    }

    /// Produces the header value for `body` signed at `timestamp`.
    pub fn sign(&self, body: &[u8], timestamp: i64) -> Result<String, SignatureError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| SignatureError::InvalidKey)?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(body);
        let digest = mac.finalize().into_bytes();
        Ok(format!("t={},v1={}", timestamp, hex::encode(digest)))
    }

    /// Signs `body` with the current time.
    pub fn sign_now(&self, body: &[u8]) -> Result<String, SignatureError> {
        self.sign(body, chrono::Utc::now().timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &[u8] = br#"{"priceRange":{"min":3100,"max":5300}}"#;
    const NOW: i64 = 1705314600;

    fn signer() -> PayloadSigner {
        PayloadSigner::new(Secret::new("quote_signing_secret".to_string()))
    }

    #[test]
    fn sign_produces_timestamped_hex_header() {
        let header = signer().sign(BODY, NOW).unwrap();
        let (t, v1) = header.split_once(',').unwrap();
        assert_eq!(t, "t=1705314600");
        assert!(v1.starts_with("v1="));
        assert_eq!(v1.len(), 3 + 64);
    }

    #[test]
    fn digest_matches_manual_hmac_over_timestamp_and_body() {
        let mut mac = Hmac::<Sha256>::new_from_slice(b"quote_signing_secret").unwrap();
        mac.update(format!("{}.{}", NOW, std::str::from_utf8(BODY).unwrap()).as_bytes());
        let expected = hex::encode(mac.finalize().into_bytes());

        let header = signer().sign(BODY, NOW).unwrap();
        assert_eq!(header, format!("t={},v1={}", NOW, expected));
    }

    #[test]
    fn different_secrets_produce_different_digests() {
        let other = PayloadSigner::new(Secret::new("another_secret".to_string()));
        assert_ne!(signer().sign(BODY, NOW).unwrap(), other.sign(BODY, NOW).unwrap());
    }

    #[test]
    fn extreme_timestamps_sign_without_overflow() {
        for timestamp in [i64::MIN, -1, 0, i64::MAX] {
            let header = signer().sign(BODY, timestamp).unwrap();
            assert!(header.starts_with(&format!("t={},v1=", timestamp)));
        }
    }

    #[test]
    fn sign_now_uses_current_time() {
        let before = chrono::Utc::now().timestamp();
        let header = signer().sign_now(BODY).unwrap();
        let after = chrono::Utc::now().timestamp();

        let t: i64 = header
            .strip_prefix("t=")
            .and_then(|rest| rest.split_once(','))
            .map(|(t, _)| t.parse().unwrap())
            .unwrap();
        assert!(before <= t && t <= after);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let debug = format!("{:?}", signer());
        assert!(!debug.contains("quote_signing_secret"));
        assert!(debug.contains("REDACTED"));
    }
}
