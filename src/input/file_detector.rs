//! Media type detection for candidate files

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Text,
    Markdown,
    Other(String),
}

impl MediaType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => MediaType::Pdf,
            "txt" => MediaType::Text,
            "md" | "markdown" => MediaType::Markdown,
            _ => MediaType::Other("application/octet-stream".to_string()),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or_else(|| MediaType::Other("application/octet-stream".to_string()))
    }

    pub fn parse(mime: &str) -> Self {
        match mime.trim().to_lowercase().as_str() {
            "application/pdf" => MediaType::Pdf,
            "text/plain" => MediaType::Text,
            "text/markdown" => MediaType::Markdown,
            other => MediaType::Other(other.to_string()),
        }
    }

    pub fn as_mime(&self) -> &str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Text => "text/plain",
            MediaType::Markdown => "text/markdown",
            MediaType::Other(mime) => mime,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}
