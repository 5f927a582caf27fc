use http::HeaderMap;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod policy;
pub mod principal;

pub use principal::{Principal, Role};

/// Claims embedded in a signed credential.
///
/// Produced by the external issuance flow; this server only ever decodes
/// them. `iat` is carried for diagnostics, validity is signature plus `exp`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject id of the authenticated user
    pub sub: i64,
    /// Role membership
    pub role: Role,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Why a credential was rejected.
///
/// The distinction exists for internal logs only. All three variants are
/// surfaced to clients as the same unauthenticated outcome so that callers
/// cannot probe which part of a credential is wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("credential is not a parseable token")]
    Malformed,
    #[error("credential signature rejected")]
    SignatureInvalid,
    #[error("credential expired")]
    Expired,
}

/// Validates a raw bearer credential and extracts the caller's identity.
///
/// Pure function of the input, the server key, and the current clock. The
/// only way to obtain a `Principal`.
pub fn verify(raw: &str, key: &DecodingKey, leeway: u64) -> Result<Principal, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = leeway;
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<Claims>(raw, key, &validation).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidSignature => AuthError::SignatureInvalid,
        _ => AuthError::Malformed,
    })?;

    Ok(Principal {
        subject_id: data.claims.sub,
        role: data.claims.role,
    })
}

/// Extracts the raw credential from an Authorization header.
///
/// Accepts any casing of the "Bearer " prefix. Returns None for a missing
/// header, a non-UTF-8 value, or a value without the prefix; callers treat
/// all of those as unauthenticated before attempting verification.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(http::header::AUTHORIZATION)?;
    let header_str = header.to_str().ok()?;
    if header_str.len() >= 7 && header_str[..7].eq_ignore_ascii_case("bearer ") {
        Some(&header_str[7..])
    } else {
        None
    }
}
