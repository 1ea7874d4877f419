//! Observable view state

/// Snapshot published after every controller transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub is_analyzing: bool,
    pub has_document: bool,
    pub has_result: bool,
    pub expanded_index: Option<usize>,
}

impl ViewState {
    /// The analyze trigger is available only with a document and nothing in flight.
    pub fn can_analyze(&self) -> bool {
        self.has_document && !self.is_analyzing
    }
}
