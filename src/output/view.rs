//! Presentation state for a received analysis result

use crate::analysis::result::{AnalysisResult, FeedbackKind};
use crate::error::{Result, ResumeScanError};
use std::borrow::Cow;

/// Messages longer than this are abridged unless expanded.
pub const TRUNCATE_AT: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Text to display for a feedback message.
///
/// Long messages show their first 100 characters and an ellipsis unless the
/// item is expanded. Counts characters, never splits a code point.
pub fn truncation_policy(message: &str, expanded: bool) -> Cow<'_, str> {
    if expanded {
        return Cow::Borrowed(message);
    }
    match message.char_indices().nth(TRUNCATE_AT) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &message[..cut], ELLIPSIS)),
        None => Cow::Borrowed(message),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedFeedback<'a> {
    pub index: usize,
    pub kind: FeedbackKind,
    pub text: Cow<'a, str>,
    /// The full message is hidden, offer "see more".
    pub truncated: bool,
}

/// Holds the current result and the single expanded feedback index.
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    result: Option<AnalysisResult>,
    expanded: Option<usize>,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held result wholesale. Any expansion referred to the old
    /// sequence and is dropped.
    pub fn present(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.expanded = None;
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Show one item in full, collapsing whichever was expanded before.
    pub fn expand(&mut self, index: usize) -> Result<()> {
        let len = self.result.as_ref().map_or(0, |result| result.feedback().len());
        if index >= len {
            return Err(ResumeScanError::InvalidInput(format!(
                "feedback index {} is out of range ({} items)",
                index, len
            )));
        }
        self.expanded = Some(index);
        Ok(())
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn displayed_message(&self, index: usize) -> Option<Cow<'_, str>> {
        let item = self.result.as_ref()?.feedback().get(index)?;
        Some(truncation_policy(&item.message, self.is_expanded(index)))
    }

    /// Feedback in received order, as it should be displayed.
    pub fn displayed_feedback(&self) -> Vec<DisplayedFeedback<'_>> {
        let Some(result) = &self.result else {
            return Vec::new();
        };

        result
            .feedback()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let text = truncation_policy(&item.message, self.is_expanded(index));
                let truncated = matches!(text, Cow::Owned(_));
                DisplayedFeedback {
                    index,
                    kind: item.kind,
                    text,
                    truncated,
                }
            })
            .collect()
    }
}
