use thiserror::Error;

/// Errors returned by the endpoint bindings.
///
/// Most upstream semantic failures (e.g. an invalid access token) are not
/// errors at this layer: they come back as regular responses carrying a
/// `code`. A reward body whose `result` is `null` is the exception.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response has a null result (code={code}): {message}")]
    MissingResult { code: String, message: String },
}

