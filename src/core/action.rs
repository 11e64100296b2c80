//! Actions produced by input handling for the app to carry out

/// Literal field values captured when the Create button is confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSubmitted {
    pub alias: String,
    pub chain: String,
    pub label: String,
    pub memo: String,
}

/// Side effects requested by the router or a focused field
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action needed
    None,

    /// Run the account creation pipeline
    Submit(AccountSubmitted),

    /// Move the account list selection
    SelectNext,
    SelectPrev,

    /// Copy the selected account's address to the clipboard
    CopyAddress,

    /// Request quit
    Quit,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
