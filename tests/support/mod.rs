use claims_api::ProxyRequest;
use serde_json::{json, Value};

pub const REQUEST_ID: &str = "c6af9ac6-7b61-11e6-9a41-93e8deadbeef";

/// REST API proxy event as delivered behind a Cognito user pool authorizer.
pub fn gateway_event(method: &str, authorizer: Value) -> ProxyRequest {
    let event = json!({
        "resource": "/user-info",
        "path": "/user-info",
        "httpMethod": method,
        "headers": {
            "Authorization": "eyJraWQiOi...",
            "Origin": "https://gonzalo-munoz.com",
        },
        "multiValueHeaders": {},
        "queryStringParameters": null,
        "pathParameters": null,
        "stageVariables": null,
        "requestContext": {
            "accountId": "123456789012",
            "resourceId": "abc123",
            "stage": "prod",
            "requestId": REQUEST_ID,
            "identity": { "sourceIp": "203.0.113.7" },
            "resourcePath": "/user-info",
            "httpMethod": method,
            "apiId": "1234567890",
            "authorizer": authorizer,
        },
        "body": null,
        "isBase64Encoded": false,
    });

    serde_json::from_value(event).expect("gateway event should deserialize")
}

pub fn cognito_claims() -> Value {
    json!({
        "sub": "123",
        "email": "a@b.com",
        "email_verified": "true",
        "cognito:username": "abee",
        "token_use": "id",
        "auth_time": "1700000000",
        "iss": "https://cognito-idp.us-east-1.amazonaws.com/us-east-1_example",
        "exp": "1700003600",
        "iat": "1700000000",
    })
}

pub fn body(response: &claims_api::ProxyResponse) -> Value {
    serde_json::from_str(&response.body).expect("body should be json")
}
