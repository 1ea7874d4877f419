//! Output module
//! Result presentation, console/JSON rendering and report export

pub mod formatter;
pub mod report;
pub mod view;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, OutputFormatter};
pub use report::{export_report, ReportExporter, REPORT_FILE_NAME};
pub use view::{truncation_policy, DisplayedFeedback, ResultView};
