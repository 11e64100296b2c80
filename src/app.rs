use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::warn;

use crate::core::{AccountSubmitted, Action, InputRouter, Pane};
use crate::domain::{AccountRecord, KeyGenerator};
use crate::modules::form::FormState;
use crate::services::AccountPipeline;
use crate::store::AccountStore;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Everything the event loop mutates: the form, pane focus, the account
/// list and the status line.
#[derive(Debug)]
pub struct App {
    pub form: FormState,
    pub router: InputRouter,
    pub accounts: Vec<AccountRecord>,
    pub selected_account: usize,
    pub status: Option<StatusMessage>,
    pub pending_copy: Option<String>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            router: InputRouter::new(),
            accounts: Vec::new(),
            selected_account: 0,
            status: None,
            pending_copy: None,
            should_quit: false,
        }
    }

    pub fn pane(&self) -> Pane {
        self.router.pane()
    }

    /// Replace the account list, e.g. with what the store holds at startup.
    pub fn set_accounts(&mut self, accounts: Vec<AccountRecord>) {
        self.accounts = accounts;
        self.clamp_selection();
    }

    pub fn selected(&self) -> Option<&AccountRecord> {
        self.accounts.get(self.selected_account)
    }

    /// Route one key press and carry out whatever it asks for.
    pub fn handle_key<K, S>(&mut self, key: KeyEvent, pipeline: &AccountPipeline<K, S>)
    where
        K: KeyGenerator,
        S: AccountStore,
    {
        let action = self.router.handle(key, &mut self.form);
        self.apply_action(action, pipeline);
    }

    pub fn apply_action<K, S>(&mut self, action: Action, pipeline: &AccountPipeline<K, S>)
    where
        K: KeyGenerator,
        S: AccountStore,
    {
        match action {
            Action::None => {}
            Action::Submit(submitted) => self.apply_submission(&submitted, pipeline),
            Action::SelectNext => self.move_selection_down(),
            Action::SelectPrev => self.move_selection_up(),
            Action::CopyAddress => match self.selected() {
                Some(account) => self.pending_copy = Some(account.address.clone()),
                None => self.set_status("Nothing to copy", StatusLevel::Warn),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    /// Run the pipeline for a submitted form.
    ///
    /// Success resets the form and appends the new account; failure leaves
    /// the form untouched for a retry.
    pub fn apply_submission<K, S>(
        &mut self,
        submitted: &AccountSubmitted,
        pipeline: &AccountPipeline<K, S>,
    ) where
        K: KeyGenerator,
        S: AccountStore,
    {
        match pipeline.on_submit(submitted) {
            Ok(account) => {
                self.set_status(
                    format!("Created {} ({})", display_alias(&account), account.address),
                    StatusLevel::Info,
                );
                self.form = FormState::new();
                self.accounts.push(account);
                self.selected_account = self.accounts.len() - 1;
            }
            Err(err) => {
                warn!(error = %err, "account creation failed");
                self.set_status(format!("Account creation failed: {err}"), StatusLevel::Error);
            }
        }
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_account + 1 < self.accounts.len() {
            self.selected_account += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_account = self.selected_account.saturating_sub(1);
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_account >= self.accounts.len() {
            self.selected_account = self.accounts.len().saturating_sub(1);
        }
    }
}

fn display_alias(account: &AccountRecord) -> &str {
    if account.alias.trim().is_empty() {
        "account"
    } else {
        &account.alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeneratedKey;
    use crate::error::KeyGenerationError;
    use crate::store::SqliteAccountStore;

    struct FixedKeys;

    impl KeyGenerator for FixedKeys {
        fn generate(&self) -> Result<GeneratedKey, KeyGenerationError> {
            Ok(GeneratedKey {
                address: "0xABC".into(),
                private_key: "deadbeef".into(),
            })
        }
    }

    fn pipeline() -> AccountPipeline<FixedKeys, SqliteAccountStore> {
        let store = SqliteAccountStore::open_in_memory().unwrap();
        store.migrate().unwrap();
        AccountPipeline::new(FixedKeys, store)
    }

    fn account(address: &str) -> AccountRecord {
        AccountRecord::new(address, "ff")
    }

    #[test]
    fn test_selection_bounds() {
        let pipeline = pipeline();
        let mut app = App::new();
        app.set_accounts(vec![account("0x1"), account("0x2")]);

        app.apply_action(Action::SelectPrev, &pipeline);
        assert_eq!(app.selected_account, 0);
        app.apply_action(Action::SelectNext, &pipeline);
        app.apply_action(Action::SelectNext, &pipeline);
        assert_eq!(app.selected_account, 1);

        app.set_accounts(vec![account("0x1")]);
        assert_eq!(app.selected_account, 0);
    }

    #[test]
    fn test_copy_request() {
        let pipeline = pipeline();
        let mut app = App::new();
        app.apply_action(Action::CopyAddress, &pipeline);
        assert_eq!(app.take_copy_request(), None);
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));

        app.set_accounts(vec![account("0x1")]);
        app.apply_action(Action::CopyAddress, &pipeline);
        assert_eq!(app.take_copy_request().as_deref(), Some("0x1"));
        assert_eq!(app.take_copy_request(), None);
    }

    #[test]
    fn test_quit() {
        let pipeline = pipeline();
        let mut app = App::new();
        app.apply_action(Action::Quit, &pipeline);
        assert!(app.should_quit);
    }

    #[test]
    fn test_submission_appends_and_selects() {
        let pipeline = pipeline();
        let mut app = App::new();
        app.set_accounts(vec![account("0x1")]);
        let submitted = AccountSubmitted {
            alias: "Alice".into(),
            chain: String::new(),
            label: "a,b".into(),
            memo: String::new(),
        };
        app.apply_submission(&submitted, &pipeline);

        assert_eq!(app.accounts.len(), 2);
        assert_eq!(app.selected_account, 1);
        assert_eq!(app.selected().map(|a| a.labels.clone()), Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Info));
    }
}
