//! Lambda handlers behind an API Gateway Cognito authorizer.
//!
//! The gateway has already authenticated the caller and placed the identity
//! claims in `requestContext.authorizer`. The handlers here only read those
//! claims and shape them into JSON responses with CORS headers.

pub mod claims;
pub mod config;
pub mod error;
pub mod handlers;
pub mod proxy;
pub mod telemetry;

pub use claims::Claims;
pub use config::ApiConfig;
pub use error::ApiError;
pub use proxy::{Cors, ProxyRequest, ProxyResponse};
