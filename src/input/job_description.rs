//! Optional job description text

use crate::error::ValidationError;

pub const MAX_JOB_DESCRIPTION_CHARS: usize = 1000;

/// Job description text, at most 1000 characters. Empty means "not supplied".
///
/// Oversized input is refused rather than truncated so nothing the user
/// pasted is silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDescription {
    text: String,
}

impl JobDescription {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        let length = text.chars().count();
        if length > MAX_JOB_DESCRIPTION_CHARS {
            return Err(ValidationError::JobDescriptionTooLong {
                length,
                limit: MAX_JOB_DESCRIPTION_CHARS,
            });
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The value sent to the service, `None` when nothing was supplied.
    pub fn as_field(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    /// Counter shown under the input, e.g. `42/1000`.
    pub fn counter(&self) -> String {
        format!("{}/{}", self.char_count(), MAX_JOB_DESCRIPTION_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_limit_is_accepted() {
        let text = "a".repeat(MAX_JOB_DESCRIPTION_CHARS);
        let job = JobDescription::new(text).unwrap();
        assert_eq!(job.counter(), "1000/1000");
    }

    #[test]
    fn test_over_limit_is_refused() {
        let err = JobDescription::new("a".repeat(1001)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::JobDescriptionTooLong {
                length: 1001,
                limit: 1000
            }
        );
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 1000 two-byte characters
        let job = JobDescription::new("é".repeat(1000)).unwrap();
        assert_eq!(job.char_count(), 1000);
    }

    #[test]
    fn test_empty_is_not_sent() {
        assert_eq!(JobDescription::default().as_field(), None);
        assert_eq!(JobDescription::new("Rust").unwrap().as_field(), Some("Rust"));
    }
}
