use serde::Serialize;

use crate::claims::{self, Claims};
use crate::config::ApiConfig;
use crate::proxy::{Cors, ProxyRequest, ProxyResponse};

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub message: String,
    pub user_info: UserInfo,
    /// Echoes the request id rather than a time.
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub email: String,
    pub username: String,
    pub sub: String,
}

impl From<&Claims> for UserInfo {
    fn from(claims: &Claims) -> Self {
        Self {
            email: claims.get_or(claims::EMAIL, UNKNOWN),
            username: claims.get_or(claims::USERNAME, UNKNOWN),
            sub: claims.get_or(claims::SUB, UNKNOWN),
        }
    }
}

/// Greets the authenticated caller by email.
///
/// `invocation_id` stands in for the gateway request id when the event does
/// not carry one. Only nested `authorizer.claims` are read; without them every
/// field falls back to `"Unknown"`.
pub fn respond(config: &ApiConfig, request: &ProxyRequest, invocation_id: &str) -> ProxyResponse {
    if request.is_preflight() {
        return ProxyResponse::preflight(&config.allowed_origin, Cors::Authenticated);
    }

    let claims = Claims::nested(request.authorizer()).unwrap_or_else(|| {
        tracing::warn!("authorizer context has no nested claims");
        Claims::default()
    });
    let user_info = UserInfo::from(&claims);

    let body = Greeting {
        message: format!("Hello, {}!", user_info.email),
        user_info,
        timestamp: request.request_id().unwrap_or(invocation_id).to_string(),
    };

    ProxyResponse::json(200, &body, &config.allowed_origin, Cors::Authenticated)
}
