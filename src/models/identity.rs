use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims the server owns; a caller-supplied value for these is replaced at issuance.
pub const RESERVED_CLAIMS: [&str; 2] = ["exp", "iat"];

/// The caller identity carried inside a session token.
///
/// Only `email` has a known shape. Anything else the caller sent to `/jwt` is kept in
/// `claims` and signed as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl Identity {
    pub fn with_email(email: impl Into<String>) -> Self {
        Identity {
            email: Some(email.into()),
            claims: Map::new(),
        }
    }

    pub(crate) fn without_reserved_claims(mut self) -> Self {
        for name in RESERVED_CLAIMS {
            self.claims.remove(name);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub identity: Identity,
    pub iat: i64, // issued at (UNIX timestamp)
    pub exp: i64, // expiration (UNIX timestamp)
}
