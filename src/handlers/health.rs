use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::proxy::{Cors, ProxyResponse};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub timestamp: String,
    pub message: &'static str,
}

/// Public liveness check. Consumes nothing from the request.
pub fn respond(config: &ApiConfig) -> ProxyResponse {
    respond_at(config, Utc::now())
}

pub fn respond_at(config: &ApiConfig, now: DateTime<Utc>) -> ProxyResponse {
    let body = HealthStatus {
        status: "healthy",
        service: config.service_name.clone(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        message: "API is running",
    };

    ProxyResponse::json(200, &body, &config.allowed_origin, Cors::Public)
}
