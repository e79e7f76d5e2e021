//! Session token decoding
//!
//! Tokens are JWTs issued by the API. The client only reads the payload to
//! gate the UI; the signature is never checked here, the API stays the
//! authority for anything that matters.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims carried in the token payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry as seconds since the Unix epoch. NumericDate may carry a
    /// fractional part.
    pub exp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Remaining claims, kept untyped
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Why a raw string could not be decoded as a token
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("expected 3 token segments, found {0}")]
    Segments(usize),

    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token payload is not a valid claims object: {0}")]
    Claims(#[from] serde_json::Error),
}

/// A raw token string together with its decoded claims
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken {
    raw: String,
    claims: Claims,
}

impl SessionToken {
    /// Decode `raw` without verifying its signature
    pub fn decode(raw: impl Into<String>) -> Result<Self, TokenError> {
        let raw = raw.into();
        let claims = decode_claims(&raw)?;
        Ok(Self { raw, claims })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_string(self) -> String {
        self.raw
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Expiry truncated to whole seconds
    pub fn expires_at(&self) -> i64 {
        self.claims.exp.floor() as i64
    }

    pub fn subject(&self) -> Option<&str> {
        self.claims.sub.as_deref()
    }

    /// A token is expired once `now` reaches its `exp` claim
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.claims.exp <= now as f64
    }
}

/// Decode the payload segment of a JWT into [`Claims`]
pub fn decode_claims(raw: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = raw.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Segments(segments.len()));
    }

    // Some issuers keep the base64 padding
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}
