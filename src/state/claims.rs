//! Unverified decoding of bearer-token claims.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway issues JWTs. The client never checks signatures; it only reads
//! the payload segment to learn the caller's role and username. Anything the
//! client derives here is a UI hint, the gateway remains the authority.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("token has no claims segment")]
    MissingPayload,
    #[error("claims segment is not base64: {0}")]
    InvalidBase64(String),
    #[error("claims segment is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}

/// Roles the auth service can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    Customer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Customer => "customer",
        }
    }

    /// Whether this role may add products to the catalog.
    pub fn can_manage_catalog(self) -> bool {
        match self {
            Self::Admin => true,
            Self::User | Self::Customer => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClaimsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "customer" => Ok(Self::Customer),
            other => Err(ClaimsError::UnknownRole(other.to_owned())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    role: String,
    #[serde(default)]
    sub: Option<String>,
}

/// Claims the storefront reads from a token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub role: Role,
    /// Username the token was issued to.
    pub subject: Option<String>,
}

/// Decode the second dot-separated segment of `token` as JSON claims.
///
/// Accepts base64url (the JWT alphabet) and falls back to the standard
/// alphabet; trailing `=` padding is tolerated in both.
///
/// # Errors
///
/// Returns [`ClaimsError`] when the segment is missing, is not base64, is not
/// a JSON object with a string `role`, or names a role outside [`Role`].
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let segment = token
        .split('.')
        .nth(1)
        .map(|s| s.trim_end_matches('='))
        .filter(|s| !s.is_empty())
        .ok_or(ClaimsError::MissingPayload)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD_NO_PAD.decode(segment))
        .map_err(|e| ClaimsError::InvalidBase64(e.to_string()))?;

    let raw: RawClaims = serde_json::from_slice(&bytes).map_err(|e| ClaimsError::InvalidJson(e.to_string()))?;

    Ok(TokenClaims { role: raw.role.parse()?, subject: raw.sub })
}
