use serde::Deserialize;
use thiserror::Error;

/// Result type for Salesfly operations.
pub type Result<T> = std::result::Result<T, SalesflyError>;

/// Salesfly SDK error types
#[derive(Debug, Error)]
pub enum SalesflyError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API rejected the request with a structured error body.
    #[error("Salesfly API error (status={status}{}): {message}", code_suffix(.code))]
    Response {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Machine-readable error code (e.g. "err-invalid-ip")
        code: Option<String>,
    },

    /// Non-2xx response whose body was not a Salesfly error document.
    #[error("transport error (status={status}): {body}")]
    Transport { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn code_suffix(code: &Option<String>) -> String {
    match code {
        Some(code) => format!(", code={code}"),
        None => String::new(),
    }
}

impl SalesflyError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SalesflyError::Response { status, .. } | SalesflyError::Transport { status, .. } => {
                Some(*status)
            }
            SalesflyError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Machine-readable error code from the API, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            SalesflyError::Response { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

/// Error document returned by the Salesfly API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl From<ApiError> for SalesflyError {
    fn from(err: ApiError) -> Self {
        SalesflyError::Response {
            status: err.status,
            message: err.message,
            code: err.code,
        }
    }
}
