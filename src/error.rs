use thiserror::Error;

/// Error type for the `Wayfarer` service
#[derive(Error, Debug)]
pub enum WayfarerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl WayfarerError {
    /// Message safe to show an end user. Provider causes stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WayfarerError::NetworkError(_) | WayfarerError::ApiError(_) => {
                "Unable to reach external services right now. Please try again later.".to_string()
            }
            WayfarerError::ParseError(_) => {
                "Received an unexpected response from an external service.".to_string()
            }
            WayfarerError::Validation(message) => format!("Invalid input: {message}"),
            WayfarerError::ConfigError(_) => {
                "Service is misconfigured. Please check the server logs.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for WayfarerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            WayfarerError::NetworkError(err.to_string())
        } else if err.is_decode() {
            WayfarerError::ParseError(err.to_string())
        } else {
            WayfarerError::ApiError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, WayfarerError>;
