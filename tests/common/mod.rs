//! Shared test doubles

#![allow(dead_code)]

use resume_scan::analysis::{AnalysisResult, AnalysisService, AnalyzeRequest, FeedbackItem, Score};
use resume_scan::error::{Result, ResumeScanError};
use resume_scan::input::{CandidateFile, MediaType};
use resume_scan::upload::{NotificationKind, Notifier};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<(NotificationKind, String)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.seen.lock().unwrap().iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn last(&self) -> Option<(NotificationKind, String)> {
        self.seen.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.seen.lock().unwrap().push((kind, message.to_string()));
    }
}

/// Replays queued outcomes and records every request it receives.
#[derive(Default)]
pub struct ScriptedService {
    responses: Mutex<VecDeque<Result<AnalysisResult>>>,
    requests: Mutex<Vec<AnalyzeRequest>>,
    calls: AtomicUsize,
}

impl ScriptedService {
    pub fn with(responses: Vec<Result<AnalysisResult>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<AnalyzeRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl AnalysisService for ScriptedService {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(ResumeScanError::Transport("no scripted response".to_string())))
    }
}

pub fn pdf(name: &str, size: usize) -> CandidateFile {
    CandidateFile::new(name, MediaType::Pdf, vec![b'%'; size])
}

pub fn sample_result() -> AnalysisResult {
    AnalysisResult::new(
        Score::new(82.0),
        vec![
            FeedbackItem::success("Good keyword match"),
            FeedbackItem::warning("Consider adding a contact section"),
        ],
    )
}
