use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssnError {
    #[error("Invalid ISSN length: expected 8 characters, found {length}")]
    InvalidLength { length: usize },

    #[error("Invalid ISSN format: first 7 characters should be digits")]
    InvalidFormat,

    #[error("Invalid ISSN check digit: expected {expected} but found {found}")]
    CheckDigitMismatch { expected: char, found: char },

    #[error("Request timed out for ISSN: {issn}")]
    Timeout { issn: String },

    #[error("Failed to retrieve ISSN data. Status code: {status}, Content type: {content_type}")]
    UnexpectedResponse { status: u16, content_type: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid registry URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed registry response: {message}")]
    MalformedResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

/// Coarse grouping reported alongside failures in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Transport,
    Response,
    Config,
}

impl IssnError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IssnError::InvalidLength { .. }
            | IssnError::InvalidFormat
            | IssnError::CheckDigitMismatch { .. } => ErrorCategory::Input,
            IssnError::Timeout { .. }
            | IssnError::UnexpectedResponse { .. }
            | IssnError::Http(_) => ErrorCategory::Transport,
            IssnError::MalformedResponse { .. } => ErrorCategory::Response,
            IssnError::InvalidUrl(_) | IssnError::IoError(_) | IssnError::ConfigError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        IssnError::MalformedResponse {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IssnError>;
