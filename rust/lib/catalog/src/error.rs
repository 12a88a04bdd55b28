use thiserror::Error;

/// Client-side catalog error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API could not be reached.
    #[error("network: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("decode: {0}")]
    Decode(String),

    /// The server rejected a create with a human-readable message.
    #[error("rejected: {0}")]
    Validation(String),

    /// The addressed product does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// A missing record is a benign outcome for deletes.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
