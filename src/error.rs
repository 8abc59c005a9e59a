//! Error types for the Sleeper recap pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecapError>;

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sleeper endpoint {endpoint} unavailable: {reason}")]
    SourceUnavailable { endpoint: String, reason: String },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Invalid league ID: {value:?}")]
    InvalidLeagueId { value: String },

    #[error("Invalid week: {value:?}")]
    InvalidWeek { value: String },

    #[error("Not enough league data to build a report (missing {missing})")]
    InsufficientData { missing: &'static str },

    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Coarse classification used by the trigger surface to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A required upstream call failed, or the league has nothing to report on.
    SourceUnavailable,
    /// The caller supplied a missing or unusable parameter.
    MalformedInput,
    /// Anything else; details are logged, never returned.
    InternalFailure,
}

impl RecapError {
    pub fn class(&self) -> ErrorClass {
        match self {
            RecapError::SourceUnavailable { .. } | RecapError::InsufficientData { .. } => {
                ErrorClass::SourceUnavailable
            }
            RecapError::MissingLeagueId { .. }
            | RecapError::InvalidLeagueId { .. }
            | RecapError::InvalidWeek { .. } => ErrorClass::MalformedInput,
            _ => ErrorClass::InternalFailure,
        }
    }

    /// HTTP-equivalent status for the error envelope.
    pub fn status_code(&self) -> u16 {
        match self.class() {
            ErrorClass::MalformedInput => 400,
            ErrorClass::SourceUnavailable => 404,
            ErrorClass::InternalFailure => 500,
        }
    }

    /// Process exit status used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.class() {
            ErrorClass::InternalFailure => 1,
            ErrorClass::MalformedInput => 2,
            ErrorClass::SourceUnavailable => 3,
        }
    }

    /// Message safe to hand back to a caller. Internal failures stay generic.
    pub fn public_message(&self) -> String {
        match self.class() {
            ErrorClass::InternalFailure => "Internal server error".to_string(),
            ErrorClass::SourceUnavailable => match self {
                RecapError::InsufficientData { .. } => {
                    "Failed to fetch league data or no matchups found".to_string()
                }
                _ => "Failed to fetch league data".to_string(),
            },
            ErrorClass::MalformedInput => self.to_string(),
        }
    }
}

impl From<anyhow::Error> for RecapError {
    fn from(err: anyhow::Error) -> Self {
        RecapError::Internal {
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests;
