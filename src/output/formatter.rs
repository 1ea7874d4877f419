//! Console and JSON rendering of analysis results

use crate::analysis::result::{FeedbackKind, Score};
use crate::config::OutputFormat;
use crate::error::{Result, ResumeScanError};
use crate::output::view::ResultView;
use colored::{Color, Colorize};

const SCORE_BAR_WIDTH: usize = 20;

/// Trait for rendering the held result
pub trait OutputFormatter {
    fn format_result(&self, view: &ResultView) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with a score bar and coloured feedback
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter emitting the wire shape of the result
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn format_score_bar(&self, score: Score) -> String {
        let filled = ((score.ratio() * SCORE_BAR_WIDTH as f64).round() as usize).min(SCORE_BAR_WIDTH);
        let bar = format!(
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(SCORE_BAR_WIDTH - filled)
        );
        self.colorize(&bar, Color::Blue)
    }

    fn kind_icon(&self, kind: FeedbackKind) -> String {
        match kind {
            FeedbackKind::Success => self.colorize(kind.marker(), Color::Green),
            FeedbackKind::Warning => self.colorize(kind.marker(), Color::Yellow),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, view: &ResultView) -> Result<String> {
        let result = view
            .result()
            .ok_or_else(|| ResumeScanError::OutputFormatting("no analysis result to display".to_string()))?;

        let mut output = String::new();
        output.push_str(&self.format_header("Analysis Results"));
        output.push_str(&format!(
            "Resume Score  {}/100  {}\n",
            result.score(),
            self.format_score_bar(result.score())
        ));

        let shown = view.displayed_feedback();
        if shown.is_empty() {
            return Ok(output);
        }

        output.push('\n');
        for item in shown {
            let color = match item.kind {
                FeedbackKind::Success => Color::Green,
                FeedbackKind::Warning => Color::Yellow,
            };
            output.push_str(&format!("{} {}", self.kind_icon(item.kind), self.colorize(&item.text, color)));
            if item.truncated {
                let hint = format!(" (see more: --expand {})", item.index);
                output.push_str(&self.colorize(&hint, Color::Cyan));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, view: &ResultView) -> Result<String> {
        let result = view
            .result()
            .ok_or_else(|| ResumeScanError::OutputFormatting("no analysis result to display".to_string()))?;

        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
