use serde::Serialize;

use crate::claims::{self, Claims};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::proxy::{Cors, ProxyRequest, ProxyResponse};

#[derive(Debug, Serialize)]
pub struct User {
    pub sub: String,
    pub email: String,
    pub email_verified: String,
    pub username: String,
    pub token_use: String,
    pub auth_time: String,
    pub iss: String,
    pub exp: String,
    pub iat: String,
}

impl From<&Claims> for User {
    fn from(claims: &Claims) -> Self {
        let field = |key| claims.get_or(key, "");
        Self {
            sub: field(claims::SUB),
            email: field(claims::EMAIL),
            email_verified: field(claims::EMAIL_VERIFIED),
            username: field(claims::USERNAME),
            token_use: field(claims::TOKEN_USE),
            auth_time: field(claims::AUTH_TIME),
            iss: field(claims::ISSUER),
            exp: field(claims::EXPIRES_AT),
            iat: field(claims::ISSUED_AT),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub success: bool,
    pub user: User,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProfileError {
    pub success: bool,
    pub error: String,
    pub message: &'static str,
}

pub fn load_user(claims: &Claims) -> Result<User, ApiError> {
    if claims.is_empty() {
        return Err(ApiError::ClaimsNotFound);
    }
    Ok(User::from(claims))
}

/// Returns every identity claim of the caller.
///
/// Accepts claims nested under `authorizer.claims` or spread over the
/// authorizer context itself.
pub fn respond(config: &ApiConfig, request: &ProxyRequest) -> ProxyResponse {
    let claims = Claims::resolve(request.authorizer());

    match load_user(&claims) {
        Ok(user) => {
            let body = Profile {
                success: true,
                user,
                message: "User information retrieved successfully",
            };
            ProxyResponse::json(200, &body, &config.allowed_origin, Cors::Authenticated)
        }
        Err(err) => {
            tracing::warn!(error = %err, "no claims on authorizer context");
            let body = ProfileError {
                success: false,
                error: err.to_string(),
                message: "Failed to retrieve user information",
            };
            ProxyResponse::json(500, &body, &config.allowed_origin, Cors::OriginOnly)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::{ALLOW_HEADERS, ALLOW_METHODS};
    use serde_json::{json, Value};

    fn with_authorizer(authorizer: Value) -> ProxyRequest {
        serde_json::from_value(json!({
            "httpMethod": "GET",
            "requestContext": { "requestId": "r", "authorizer": authorizer },
        }))
        .unwrap()
    }

    fn body(response: &ProxyResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn projects_all_nine_fields() {
        let request = with_authorizer(json!({ "claims": {
            "sub": "123",
            "email": "a@b.com",
            "email_verified": "true",
            "cognito:username": "abee",
            "token_use": "id",
            "auth_time": "1700000000",
            "iss": "https://cognito-idp.us-east-1.amazonaws.com/pool",
            "exp": "1700003600",
            "iat": "1700000000",
            "aud": "client",
        } }));

        let response = respond(&ApiConfig::default(), &request);

        assert_eq!(response.status_code, 200);
        assert_eq!(
            body(&response),
            json!({
                "success": true,
                "user": {
                    "sub": "123",
                    "email": "a@b.com",
                    "email_verified": "true",
                    "username": "abee",
                    "token_use": "id",
                    "auth_time": "1700000000",
                    "iss": "https://cognito-idp.us-east-1.amazonaws.com/pool",
                    "exp": "1700003600",
                    "iat": "1700000000",
                },
                "message": "User information retrieved successfully",
            })
        );
        assert_eq!(response.header(ALLOW_METHODS), Some("GET,OPTIONS"));
    }

    #[test]
    fn flat_claims_with_gaps_default_to_empty() {
        let request = with_authorizer(json!({ "sub": "123", "email_verified": true }));

        let body = body(&respond(&ApiConfig::default(), &request));

        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["sub"], "123");
        assert_eq!(body["user"]["email_verified"], "");
        assert_eq!(body["user"]["email"], "");
    }

    #[test]
    fn empty_claims_is_an_error() {
        let request = with_authorizer(json!({ "claims": {} }));

        let response = respond(&ApiConfig::default(), &request);

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body(&response),
            json!({
                "success": false,
                "error": "Claims not found",
                "message": "Failed to retrieve user information",
            })
        );
        assert_eq!(response.header(ALLOW_HEADERS), None);
        assert_eq!(response.header(ALLOW_METHODS), None);
    }

    #[test]
    fn load_user_rejects_empty_claims() {
        assert!(matches!(
            load_user(&Claims::default()),
            Err(ApiError::ClaimsNotFound)
        ));
    }
}
