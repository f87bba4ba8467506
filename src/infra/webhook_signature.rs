//! Store webhook signatures: base64 HMAC-SHA256 of the raw request body,
//! sent in the `X-WC-Webhook-Signature` header.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::app_error::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-wc-webhook-signature";

fn mac_for(secret: &str, body: &[u8]) -> AppResult<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| AppError::Internal("HMAC error".into()))?;
    mac.update(body);
    Ok(mac)
}

pub fn sign_webhook_payload(secret: &str, body: &[u8]) -> AppResult<String> {
    let mac = mac_for(secret, body)?;
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Constant-time check of a delivered signature against the body.
pub fn verify_webhook_signature(secret: &str, body: &[u8], signature: &str) -> AppResult<()> {
    let expected = STANDARD
        .decode(signature.trim())
        .map_err(|_| AppError::InvalidSignature)?;

    mac_for(secret, body)?
        .verify_slice(&expected)
        .map_err(|_| AppError::InvalidSignature)
}
