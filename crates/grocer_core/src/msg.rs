#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The loop is starting; nothing has been shown yet.
    Started,
    /// Operator typed a token while the menu prompt was showing.
    ChoiceEntered(String),
    /// Operator typed the item name to look up.
    ItemEntered(String),
    /// The input stream reached end of file.
    InputClosed,
}
