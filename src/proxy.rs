//! API Gateway REST proxy integration event and response.
//!
//! Only the fields the handlers read are modelled; everything else in the
//! event is ignored on deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ApiError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";

const APPLICATION_JSON: &str = "application/json";
const GET_OPTIONS: &str = "GET,OPTIONS";
const PREFLIGHT_METHOD: &str = "OPTIONS";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub http_method: Option<String>,
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub request_id: Option<String>,
    pub authorizer: Option<Map<String, Value>>,
}

impl ProxyRequest {
    pub fn is_preflight(&self) -> bool {
        self.http_method.as_deref() == Some(PREFLIGHT_METHOD)
    }

    pub fn authorizer(&self) -> Option<&Map<String, Value>> {
        self.request_context.as_ref()?.authorizer.as_ref()
    }

    /// Request id assigned by the gateway.
    pub fn request_id(&self) -> Option<&str> {
        self.request_context.as_ref()?.request_id.as_deref()
    }
}

/// Which CORS header set a response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cors {
    /// Unauthenticated GET endpoints.
    Public,
    /// Endpoints called with an `Authorization` header.
    Authenticated,
    /// Allow-Origin only.
    OriginOnly,
}

impl Cors {
    fn headers(self, origin: &str) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(ALLOW_ORIGIN.to_string(), origin.to_string());

        let allow_headers = match self {
            Cors::Public => "Content-Type",
            Cors::Authenticated => "Content-Type,Authorization",
            Cors::OriginOnly => return headers,
        };
        headers.insert(ALLOW_HEADERS.to_string(), allow_headers.to_string());
        headers.insert(ALLOW_METHODS.to_string(), GET_OPTIONS.to_string());
        headers
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    /// Empty-bodied answer to a CORS preflight. Carries no `Content-Type`.
    pub fn preflight(origin: &str, cors: Cors) -> Self {
        Self {
            status_code: 200,
            headers: cors.headers(origin),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// JSON response with `Content-Type` and the given CORS header set.
    ///
    /// If `body` cannot be encoded the failure is logged and a bare 500 is
    /// returned instead.
    pub fn json<T: Serialize>(status_code: u16, body: &T, origin: &str, cors: Cors) -> Self {
        match encode(body) {
            Ok(body) => {
                let mut headers = cors.headers(origin);
                headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
                Self {
                    status_code,
                    headers,
                    body,
                    is_base64_encoded: false,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "response encoding failed");
                Self::internal_error(origin)
            }
        }
    }

    pub fn internal_error(origin: &str) -> Self {
        let mut headers = Cors::OriginOnly.headers(origin);
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        Self {
            status_code: 500,
            headers,
            body: json!({ "message": "Internal Server Error" }).to_string(),
            is_base64_encoded: false,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

fn encode<T: Serialize>(body: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string(body)?)
}
