use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch data: {0}")]
    FetchError(String),

    #[error("Page returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("Error parsing content: {0}")]
    ParseError(String),

    #[error("Summarization model error: {0}")]
    LlmError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Could not extract enough text to summarize.")]
    InsufficientContent,
}

impl AppError {
    /// HTTP status the API answers with when a request fails with this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::FetchError(_) | AppError::HttpStatus(_) => StatusCode::BAD_GATEWAY,
            AppError::ParseError(_) | AppError::InsufficientContent => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::LlmError(_) | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
