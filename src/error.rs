use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The authorizer context carried no claims at all. The display text is
    /// sent to the client as the `error` field.
    #[error("Claims not found")]
    ClaimsNotFound,

    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}
