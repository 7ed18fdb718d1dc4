//! HMAC-SHA256 webhook signature verification.
//!
//! Interaction webhooks are signed with a shared secret; the signature
//! arrives hex-encoded in the `X-Signature-256` header, optionally with a
//! `sha256=` prefix. Verification uses constant-time comparison.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Errors from webhook signature verification.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// The signature did not match the request body.
    #[error("signature verification failed")]
    VerificationFailed,

    /// The signing secret could not be used as an HMAC key.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),
}

/// Verify an HMAC-SHA256 signature against a request body.
///
/// Accepts both plain hex signatures and the `sha256=<hex>` form.
pub fn verify_signature(secret: &[u8], body: &[u8], signature: &str) -> Result<(), SignatureError> {
    let hex_sig = signature.strip_prefix("sha256=").unwrap_or(signature);

    let expected = hex_decode(hex_sig).map_err(|_| SignatureError::VerificationFailed)?;

    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
    mac.update(body);

    // Constant-time comparison via the hmac crate.
    mac.verify_slice(&expected)
        .map_err(|_| SignatureError::VerificationFailed)
}

/// Compute the hex-encoded HMAC-SHA256 of a body.
///
/// Used for test vectors and by gateways signing outbound deliveries.
pub fn compute_signature_hex(secret: &[u8], body: &[u8]) -> Result<String, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
    mac.update(body);
    Ok(hex_encode(&mac.finalize().into_bytes()))
}

fn hex_decode(hex: &str) -> Result<Vec<u8>, ()> {
    if hex.len() % 2 != 0 {
        return Err(());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ()))
        .collect()
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
