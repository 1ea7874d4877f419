//! Upload flow
//! Controller, notifications and observable view state

pub mod controller;
pub mod notify;
pub mod state;

pub use controller::{AnalysisOutcome, PendingAnalysis, Ticket, UploadController};
pub use notify::{ConsoleNotifier, NotificationKind, Notifier};
pub use state::ViewState;
