//! Bearer token verification
//!
//! The core only ever sees the verified `sub` claim as an opaque string;
//! token issuance is someone else's problem.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, StatusCode};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::error::{failure, ApiFailure};
use crate::state::AppState;
use menuboard_core::store::HierarchyStore;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Token validation failed: {0}")]
    ValidationError(String),
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: i64,
}

pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str, audience: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        if let Some(audience) = audience {
            validation.set_audience(&[audience]);
        }
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token and return its subject.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|e| AuthError::ValidationError(e.to_string()))
    }
}

/// Verified caller identity, extracted from the Authorization header.
pub struct AuthUser(pub String);

impl<S: HierarchyStore> FromRequestParts<AppState<S>> for AuthUser {
    type Rejection = ApiFailure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                failure(
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "Missing bearer token",
                )
            })?;

        let subject = state.verifier.verify(token).map_err(|e| {
            warn!("token rejected: {}", e);
            failure(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Invalid token")
        })?;
        Ok(AuthUser(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    fn token(secret: &str, sub: &str, exp: i64) -> String {
        encode(
            &Header::default(),
            &TestClaims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_round_trip() {
        let verifier = TokenVerifier::new("sekret", None);
        let exp = chrono::Utc::now().timestamp() + 3600;
        let sub = verifier
            .verify(&token("sekret", "auth0|alice", exp))
            .unwrap();
        assert_eq!(sub, "auth0|alice");
    }

    #[test]
    fn test_rejects_wrong_secret_and_expired() {
        let verifier = TokenVerifier::new("sekret", None);
        let exp = chrono::Utc::now().timestamp() + 3600;
        assert!(verifier.verify(&token("other", "x", exp)).is_err());
        let stale = chrono::Utc::now().timestamp() - 3600;
        assert!(verifier.verify(&token("sekret", "x", stale)).is_err());
    }
}
