//! Input handling
//! Media type detection, resume validation and job description text

pub mod document;
pub mod file_detector;
pub mod job_description;

pub use document::{CandidateFile, Document, MAX_DOCUMENT_BYTES};
pub use file_detector::MediaType;
pub use job_description::{JobDescription, MAX_JOB_DESCRIPTION_CHARS};
