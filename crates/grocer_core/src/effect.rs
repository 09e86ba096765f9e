#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowMenu,
    PromptItem,
    ReportFrequency { item: String, count: u64 },
    ListAll,
    Histogram,
    InvalidInput,
    /// Drop whatever is left on the operator's current input line.
    DiscardLine,
    /// Put the rest of a partly consumed token back in front of the input.
    Unread(String),
    InvalidChoice,
    Farewell,
}
