//! Analysis result types returned by the service

use serde::Serialize;
use std::fmt;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Resume score in the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Clamps into 0-100. Callers must reject non-finite values first.
    pub fn new(value: f64) -> Self {
        // adding 0.0 turns -0.0 into 0.0
        Self(value.clamp(MIN_SCORE, MAX_SCORE) + 0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Fraction of the full score, for progress bars.
    pub fn ratio(&self) -> f64 {
        self.0 / MAX_SCORE
    }
}

impl fmt::Display for Score {
    // f64's Display already prints 82.0 as "82" and 82.5 as "82.5"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
}

impl FeedbackKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(FeedbackKind::Success),
            "warning" => Some(FeedbackKind::Warning),
            _ => None,
        }
    }

    /// Glyph used in plain text reports.
    pub fn marker(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "✔",
            FeedbackKind::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: String,
}

impl FeedbackItem {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            message: message.into(),
        }
    }
}

/// Outcome of one successful analyze call. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    score: Score,
    feedback: Vec<FeedbackItem>,
}

impl AnalysisResult {
    pub fn new(score: Score, feedback: Vec<FeedbackItem>) -> Self {
        Self { score, feedback }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn feedback(&self) -> &[FeedbackItem] {
        &self.feedback
    }

    pub fn count(&self, kind: FeedbackKind) -> usize {
        self.feedback.iter().filter(|item| item.kind == kind).count()
    }
}
