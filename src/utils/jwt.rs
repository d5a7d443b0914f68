use std::collections::HashSet;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::Error, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use thiserror::Error;

use crate::models::identity::{Identity, TokenClaims};

/// Minimum acceptable size for the signing secret in bytes.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;
/// Minimum number of unique bytes expected for the secret to avoid trivially guessable values.
const MIN_UNIQUE_JWT_BYTES: usize = 8;

/// How long an issued session token stays valid.
pub fn token_lifetime() -> Duration {
    Duration::hours(1)
}

#[derive(Debug, Error)]
pub enum JwtSecretError {
    #[error(
        "ACCESS_TOKEN_SECRET must be at least {required} bytes, but {actual} bytes were provided"
    )]
    TooShort { actual: usize, required: usize },
    #[error(
        "ACCESS_TOKEN_SECRET must contain sufficient entropy (at least {required} unique bytes); only {actual} unique bytes found"
    )]
    LowEntropy { actual: usize, required: usize },
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").finish_non_exhaustive()
    }
}

impl JwtKeys {
    pub fn from_secret(secret: impl AsRef<[u8]>) -> Result<Self, JwtSecretError> {
        let bytes = secret.as_ref();
        validate_secret(bytes)?;

        Ok(Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        })
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

fn validate_secret(secret: &[u8]) -> Result<(), JwtSecretError> {
    if secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(JwtSecretError::TooShort {
            actual: secret.len(),
            required: MIN_JWT_SECRET_LENGTH,
        });
    }

    let unique = secret.iter().copied().collect::<HashSet<_>>().len();
    if unique < MIN_UNIQUE_JWT_BYTES {
        return Err(JwtSecretError::LowEntropy {
            actual: unique,
            required: MIN_UNIQUE_JWT_BYTES,
        });
    }

    Ok(())
}

pub fn issue_token(identity: Identity, keys: &JwtKeys) -> Result<String, Error> {
    issue_token_at(identity, keys, Utc::now().timestamp())
}

/// Signs `identity` as if it were issued at `issued_at` (UNIX seconds).
pub fn issue_token_at(identity: Identity, keys: &JwtKeys, issued_at: i64) -> Result<String, Error> {
    let claims = TokenClaims {
        identity: identity.without_reserved_claims(),
        iat: issued_at,
        exp: issued_at + token_lifetime().num_seconds(),
    };
    encode(&Header::new(Algorithm::HS256), &claims, keys.encoding_key())
}

pub fn decode_token(token: &str, keys: &JwtKeys) -> Result<TokenClaims, Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = true;
    // Callers may put any claim in the payload, `aud` included.
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::from(["exp".to_string()]);
    let data = decode::<TokenClaims>(token, keys.decoding_key(), &validation)?;

    if data.claims.exp <= Utc::now().timestamp() {
        return Err(Error::from(ErrorKind::ExpiredSignature));
    }

    Ok(data.claims)
}
