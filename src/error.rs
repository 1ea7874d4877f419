//! Error handling for the resume scanner

use thiserror::Error;

/// Local validation failures. These never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unsupported media type '{media_type}', only application/pdf is accepted")]
    UnsupportedType { media_type: String },

    #[error("file is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("no resume document has been selected")]
    NoDocument,

    #[error("job description is {length} characters, the limit is {limit}")]
    JobDescriptionTooLong { length: usize, limit: usize },
}

impl ValidationError {
    /// Message shown to the user when this validation fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::UnsupportedType { .. } => "Please upload a PDF file",
            ValidationError::TooLarge { .. } => "File size exceeds 5MB",
            ValidationError::NoDocument => "Please upload a resume first",
            ValidationError::JobDescriptionTooLong { .. } => {
                "Job description is limited to 1000 characters"
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ResumeScanError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeScanError {
    /// Whether the message can be shown to the user verbatim. Transport and
    /// parse failures carry service detail that only belongs in the log.
    pub fn is_user_visible_detail(&self) -> bool {
        matches!(self, ResumeScanError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ResumeScanError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeScanError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScanError::InvalidInput(err.to_string())
    }
}

/// Every reqwest failure is a transport problem from the user's point of view
impl From<reqwest::Error> for ResumeScanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ResumeScanError::Transport(format!("request timed out: {}", err))
        } else {
            ResumeScanError::Transport(err.to_string())
        }
    }
}
