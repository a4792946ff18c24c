use std::env;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://gonzalo-munoz.com";
pub const DEFAULT_SERVICE_NAME: &str = "gonzalo-munoz-api";

/// Values every handler stamps onto its responses.
///
/// Read once per cold start; `ALLOWED_ORIGIN` and `SERVICE_NAME` override the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub allowed_origin: String,
    pub service_name: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, default: &str| {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            allowed_origin: value("ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN),
            service_name: value("SERVICE_NAME", DEFAULT_SERVICE_NAME),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}
