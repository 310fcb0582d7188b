use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Food entry not found: {0}")]
    EntryNotFound(u64),

    #[error("No health profile on record. Run `profile` to set one up.")]
    MissingProfile,

    /// The in-memory mutation was applied; only the write-back failed.
    #[error("State updated but could not be saved: {0}")]
    PersistFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TrackError {
    /// Field-level validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        TrackError::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackError>;
