use reqwest::StatusCode;
use thiserror::Error;

/// Shown when a failing response carries no usable `message` field.
pub const DEFAULT_API_MESSAGE: &str = "API error";

/// Everything that can go wrong at the API boundary, normalized so call
/// sites handle one type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not JSON, typically an HTML error page from the
    /// hosting layer, whatever the status code said.
    #[error("backend returned non-JSON")]
    MalformedResponse,

    /// The backend answered with a failing status. `message` comes from the
    /// response body when present.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never completed.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}
