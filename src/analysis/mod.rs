//! Analysis service contract
//! Result types, response decoding and the HTTP transport

pub mod client;
pub mod response;
pub mod result;

pub use client::{AnalysisService, AnalyzeRequest, HttpAnalysisClient};
pub use response::HealthStatus;
pub use result::{AnalysisResult, FeedbackItem, FeedbackKind, Score};
