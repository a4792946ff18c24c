//! Identity claims injected by the gateway authorizer.
//!
//! A Cognito user pool authorizer nests the token claims under
//! `authorizer.claims`; a Lambda authorizer may put them directly on the
//! authorizer context. Both layouts are normalized into [`Claims`] here so the
//! handlers only ever see one shape.

use serde_json::{Map, Value};

pub const SUB: &str = "sub";
pub const EMAIL: &str = "email";
pub const EMAIL_VERIFIED: &str = "email_verified";
pub const USERNAME: &str = "cognito:username";
pub const TOKEN_USE: &str = "token_use";
pub const AUTH_TIME: &str = "auth_time";
pub const ISSUER: &str = "iss";
pub const EXPIRES_AT: &str = "exp";
pub const ISSUED_AT: &str = "iat";

const NESTED_KEY: &str = "claims";

/// Flat claim map for a single invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Claims nested under the authorizer's `claims` key, if that key holds an
    /// object.
    pub fn nested(authorizer: Option<&Map<String, Value>>) -> Option<Self> {
        match authorizer?.get(NESTED_KEY)? {
            Value::Object(claims) => Some(Self(claims.clone())),
            _ => None,
        }
    }

    /// Nested claims when present, otherwise the whole authorizer context.
    ///
    /// A `claims` key holding something other than an object does not count
    /// as nested, so the flat fallback still contains it.
    pub fn resolve(authorizer: Option<&Map<String, Value>>) -> Self {
        Self::nested(authorizer)
            .or_else(|| authorizer.map(|flat| Self(flat.clone())))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String value of `key`. Non-string values are treated as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
