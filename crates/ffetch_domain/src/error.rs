use std::string::FromUtf8Error;

use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown schema: {identifier}")]
    UnsupportedScheme { identifier: String },

    #[error("invalid identifier {identifier}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    #[error("Failed to determine the working directory: {0}")]
    WorkingDirectory(std::io::Error),

    #[error("File not found")]
    NotFound,

    #[error("body required")]
    MissingBody,

    #[error("method not allowed")]
    UnsupportedMethod(String),

    #[error("{0}")]
    Write(String),

    #[error("Failed to read body: {0}")]
    BodyRead(#[from] std::io::Error),

    #[error("Body is not valid UTF-8: {0}")]
    BodyUtf8(#[from] FromUtf8Error),

    #[error("Body is not valid JSON: {0}")]
    BodyJson(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidIdentifier { identifier: identifier.into(), reason: reason.to_string() }
    }

    /// Status a dispatcher answers with when this error ends a request.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::MissingBody => StatusCode::BAD_REQUEST,
            Error::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
