//! Plain text report export

use crate::analysis::result::AnalysisResult;
use crate::error::{Result, ResumeScanError};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const REPORT_FILE_NAME: &str = "resume-analysis-report.txt";
pub const REPORT_HEADER: &str = "Resume Analysis Report";

/// Render a result as the downloadable text report.
///
/// ```text
/// Resume Analysis Report
///
/// Score: 82/100
///
/// Feedback:
/// ✔ Good keyword match
/// ⚠ Consider adding a contact section
/// ```
///
/// The feedback block is left out entirely when there is no feedback.
pub fn export_report(result: &AnalysisResult) -> String {
    let mut report = format!("{}\n\nScore: {}/100", REPORT_HEADER, result.score());

    if !result.feedback().is_empty() {
        let lines: Vec<String> = result
            .feedback()
            .iter()
            .map(|item| format!("{} {}", item.kind.marker(), item.message))
            .collect();
        report.push_str("\n\nFeedback:\n");
        report.push_str(&lines.join("\n"));
    }

    report
}

/// Writes reports into a directory under [`REPORT_FILE_NAME`].
#[derive(Debug, Clone)]
pub struct ReportExporter {
    report_dir: PathBuf,
}

impl ReportExporter {
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        Self {
            report_dir: report_dir.into(),
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.report_dir.join(REPORT_FILE_NAME)
    }

    /// Stage the report in a temporary file next to the destination and
    /// rename it into place. The temporary file is removed on drop, so every
    /// early return cleans up after itself.
    pub fn save(&self, result: &AnalysisResult) -> Result<PathBuf> {
        save_report_to_dir(&export_report(result), &self.report_dir)
    }
}

fn save_report_to_dir(content: &str, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let destination = dir.join(REPORT_FILE_NAME);

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.flush()?;
    staged.persist(&destination).map_err(|e| {
        ResumeScanError::OutputFormatting(format!(
            "Failed to write report to {}: {}",
            destination.display(),
            e.error
        ))
    })?;

    info!("Report saved to {}", destination.display());
    Ok(destination)
}
