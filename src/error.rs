//! Error types for the MLB player comparison CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, CompareError>;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("MLB API returned status {status}")]
    ApiStatus { status: u16, body: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid source data: {message}")]
    InvalidSourceData { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid player ID: {value}")]
    InvalidPlayerId { value: String },

    #[error("Invalid season: {value}")]
    InvalidSeason { value: String },
}

impl CompareError {
    pub(crate) fn invalid_source(message: impl Into<String>) -> Self {
        CompareError::InvalidSourceData {
            message: message.into(),
        }
    }

    /// The data source was unreachable or answered with a non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, CompareError::Transport(_) | CompareError::ApiStatus { .. })
    }

    /// The data source answered, but the payload could not be interpreted.
    pub fn is_invalid_source(&self) -> bool {
        matches!(
            self,
            CompareError::Json(_) | CompareError::InvalidSourceData { .. }
        )
    }
}
