//! Upload controller: document selection, job text and the analyze round-trip

use crate::analysis::client::{AnalysisService, AnalyzeRequest};
use crate::analysis::result::AnalysisResult;
use crate::error::{Result, ValidationError};
use crate::input::{CandidateFile, Document, JobDescription};
use crate::output::view::ResultView;
use crate::upload::notify::{NotificationKind, Notifier};
use crate::upload::state::ViewState;
use log::{debug, error, info, warn};
use tokio::sync::watch;

pub const UPLOAD_SUCCEEDED: &str = "Resume uploaded successfully";
pub const ANALYSIS_SUCCEEDED: &str = "Analysis completed successfully";
pub const ANALYSIS_FAILED: &str = "Failed to analyze resume. Please try again.";

/// Identifies one dispatched analyze request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A dispatched request waiting for its outcome.
#[derive(Debug)]
pub struct PendingAnalysis {
    pub ticket: Ticket,
    pub request: AnalyzeRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The outcome belonged to the latest dispatch and was applied.
    Applied,
    /// A newer dispatch exists; this outcome was dropped on arrival.
    Superseded,
}

/// Owns the selected resume and job text, validates them, and runs the
/// analyze call against an [`AnalysisService`].
///
/// Only the most recent dispatch may resolve into the result slot. Outcomes
/// for older tickets are discarded without touching state or notifying.
pub struct UploadController<S, N> {
    service: S,
    notifier: N,
    document: Option<Document>,
    job_description: JobDescription,
    results: ResultView,
    next_ticket: u64,
    in_flight: Option<Ticket>,
    state: watch::Sender<ViewState>,
}

impl<S: AnalysisService, N: Notifier> UploadController<S, N> {
    pub fn new(service: S, notifier: N) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            service,
            notifier,
            document: None,
            job_description: JobDescription::default(),
            results: ResultView::new(),
            next_ticket: 0,
            in_flight: None,
            state,
        }
    }

    /// Validate and hold a new resume. On rejection the held document is kept.
    pub fn select_document(&mut self, candidate: CandidateFile) -> Result<()> {
        let file_name = candidate.file_name.clone();
        match Document::try_from(candidate) {
            Ok(document) => {
                info!("Selected {} ({} bytes)", document.file_name(), document.size());
                self.document = Some(document);
                self.notifier.notify(NotificationKind::Success, UPLOAD_SUCCEEDED);
                self.publish();
                Ok(())
            }
            Err(e) => {
                warn!("Rejected {}: {}", file_name, e);
                self.notifier.notify(NotificationKind::Error, e.user_message());
                Err(e.into())
            }
        }
    }

    /// Replace the job text. Text over the limit is refused and the old text kept.
    pub fn set_job_description(&mut self, text: impl Into<String>) -> Result<()> {
        self.job_description = JobDescription::new(text)?;
        Ok(())
    }

    pub fn clear_job_description(&mut self) {
        self.job_description = JobDescription::default();
    }

    /// Run one analyze round-trip against the service.
    pub async fn analyze(&mut self) -> Result<AnalysisOutcome> {
        let pending = self.begin_analysis()?;
        let outcome = self.service.analyze(&pending.request).await;
        self.finish_analysis(pending.ticket, outcome)
    }

    /// Dispatch half of [`analyze`](Self::analyze) for hosts that drive the
    /// request themselves. Supersedes any request still in flight.
    pub fn begin_analysis(&mut self) -> Result<PendingAnalysis> {
        let Some(document) = self.document.clone() else {
            let e = ValidationError::NoDocument;
            self.notifier.notify(NotificationKind::Error, e.user_message());
            return Err(e.into());
        };

        if let Some(previous) = self.in_flight {
            debug!("Analysis #{} superseded", previous.0);
        }
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.in_flight = Some(ticket);
        self.publish();

        info!("Analysis #{} dispatched", ticket.0);
        Ok(PendingAnalysis {
            ticket,
            request: AnalyzeRequest::new(document, self.job_description.clone()),
        })
    }

    /// Resolution half of [`analyze`](Self::analyze).
    ///
    /// A failure keeps the previous result, notifies one generic message and
    /// sends the cause to the log only.
    pub fn finish_analysis(
        &mut self,
        ticket: Ticket,
        outcome: Result<AnalysisResult>,
    ) -> Result<AnalysisOutcome> {
        if self.in_flight != Some(ticket) {
            debug!("Discarding outcome of superseded analysis #{}", ticket.0);
            return Ok(AnalysisOutcome::Superseded);
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                info!(
                    "Analysis #{} completed: score {}, {} feedback items",
                    ticket.0,
                    result.score(),
                    result.feedback().len()
                );
                self.results.present(result);
                self.notifier.notify(NotificationKind::Success, ANALYSIS_SUCCEEDED);
                self.publish();
                Ok(AnalysisOutcome::Applied)
            }
            Err(e) => {
                error!("Analysis #{} failed: {}", ticket.0, e);
                self.notifier.notify(NotificationKind::Error, ANALYSIS_FAILED);
                self.publish();
                Err(e)
            }
        }
    }

    /// Show one feedback item in full.
    pub fn expand(&mut self, index: usize) -> Result<()> {
        self.results.expand(index)?;
        self.publish();
        Ok(())
    }

    pub fn collapse(&mut self) {
        self.results.collapse();
        self.publish();
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn job_description(&self) -> &JobDescription {
        &self.job_description
    }

    pub fn results(&self) -> &ResultView {
        &self.results
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.results.result()
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            is_analyzing: self.is_analyzing(),
            has_document: self.document.is_some(),
            has_result: self.results.result().is_some(),
            expanded_index: self.results.expanded_index(),
        }
    }

    /// Observe every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    fn publish(&self) {
        self.state.send_replace(self.view_state());
    }
}
