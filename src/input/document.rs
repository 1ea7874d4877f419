//! Candidate files and the validated resume document

use crate::error::{Result, ResumeScanError, ValidationError};
use crate::input::file_detector::MediaType;
use std::path::Path;
use tokio::fs;

/// Largest accepted resume payload: 5 MiB.
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// A file the user picked, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub file_name: String,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

/// A resume that passed validation and may be sent to the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    file_name: String,
    bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(file_name: impl Into<String>, media_type: MediaType, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            bytes,
        }
    }

    /// Read a file from disk, declaring its media type from the extension.
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeScanError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume.pdf".to_string());

        Ok(Self::new(file_name, MediaType::from_path(path), bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Check the type first, then the size.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.media_type != MediaType::Pdf {
            return Err(ValidationError::UnsupportedType {
                media_type: self.media_type.to_string(),
            });
        }
        if self.size() > MAX_DOCUMENT_BYTES {
            return Err(ValidationError::TooLarge {
                size: self.size(),
                limit: MAX_DOCUMENT_BYTES,
            });
        }
        Ok(())
    }
}

impl TryFrom<CandidateFile> for Document {
    type Error = ValidationError;

    fn try_from(candidate: CandidateFile) -> std::result::Result<Self, Self::Error> {
        candidate.validate()?;
        Ok(Self {
            file_name: candidate.file_name,
            bytes: candidate.bytes,
        })
    }
}

impl Document {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> MediaType {
        MediaType::Pdf
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
