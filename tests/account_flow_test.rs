//! Form -> router -> pipeline -> store, driven by key events

use std::cell::RefCell;

use account_tracker::app::{App, StatusLevel};
use account_tracker::core::{AccountSubmitted, Action, InputRouter, Pane};
use account_tracker::domain::{AccountRecord, GeneratedKey, KeyGenerator};
use account_tracker::error::{KeyGenerationError, PersistenceError, StoreResult};
use account_tracker::modules::form::{Direction, FieldId, FormState};
use account_tracker::services::AccountPipeline;
use account_tracker::store::{AccountStore, SqliteAccountStore};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

struct StubKeys;

impl KeyGenerator for StubKeys {
    fn generate(&self) -> Result<GeneratedKey, KeyGenerationError> {
        Ok(GeneratedKey {
            address: "0xABC".into(),
            private_key: "deadbeef".into(),
        })
    }
}

struct NoEntropy;

impl KeyGenerator for NoEntropy {
    fn generate(&self) -> Result<GeneratedKey, KeyGenerationError> {
        Err(KeyGenerationError::Entropy("getrandom failed".into()))
    }
}

/// Records every record it is asked to save.
#[derive(Default)]
struct RecordingStore {
    saved: RefCell<Vec<AccountRecord>>,
    fail: bool,
}

impl AccountStore for RecordingStore {
    fn save(&self, account: &AccountRecord) -> StoreResult<AccountRecord> {
        self.saved.borrow_mut().push(account.clone());
        if self.fail {
            return Err(PersistenceError::Backend("database is locked".into()));
        }
        Ok(AccountRecord {
            id: Some(self.saved.borrow().len() as i64),
            ..account.clone()
        })
    }

    fn load_all(&self) -> StoreResult<Vec<AccountRecord>> {
        Ok(self.saved.borrow().clone())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text<K: KeyGenerator, S: AccountStore>(
    app: &mut App,
    pipeline: &AccountPipeline<K, S>,
    text: &str,
) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch)), pipeline);
    }
}

/// Tab into the form, Enter to focus Alias, type the alias.
fn start_with_alias<K: KeyGenerator, S: AccountStore>(
    app: &mut App,
    pipeline: &AccountPipeline<K, S>,
    alias: &str,
) {
    app.handle_key(key(KeyCode::Tab), pipeline);
    assert_eq!(app.pane(), Pane::Left);
    app.handle_key(key(KeyCode::Enter), pipeline);
    assert_eq!(app.form.focused(), Some(FieldId::Alias));
    type_text(app, pipeline, alias);
}

#[test]
fn test_create_account_end_to_end() {
    let pipeline = AccountPipeline::new(StubKeys, RecordingStore::default());
    let mut app = App::new();

    start_with_alias(&mut app, &pipeline, "Alice");
    // Down inside the memo moves its cursor, so Tab walks the form
    for _ in 0..4 {
        app.handle_key(key(KeyCode::Tab), &pipeline);
    }
    assert_eq!(app.form.focused(), Some(FieldId::Submit));

    app.handle_key(key(KeyCode::Enter), &pipeline);

    let saved = pipeline.store().saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].alias, "Alice");
    assert_eq!(saved[0].address, "0xABC");
    assert_eq!(saved[0].private_key, "deadbeef");
    assert!(saved[0].labels.is_empty());
    assert_eq!(saved[0].total_value, 0.0);

    assert_eq!(app.form, FormState::new());
    assert_eq!(app.form.focused(), None);
    assert_eq!(app.accounts.len(), 1);
    assert_eq!(app.accounts[0].id, Some(1));
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Info));
}

#[test]
fn test_store_failure_keeps_form() {
    let store = RecordingStore {
        fail: true,
        ..RecordingStore::default()
    };
    let pipeline = AccountPipeline::new(StubKeys, store);
    let mut app = App::new();

    start_with_alias(&mut app, &pipeline, "Alice");
    app.handle_key(key(KeyCode::Up), &pipeline);
    assert_eq!(app.form.focused(), Some(FieldId::Submit));
    let before = app.form.clone();

    app.handle_key(key(KeyCode::Enter), &pipeline);

    assert_eq!(pipeline.store().saved.borrow().len(), 1);
    assert_eq!(app.form, before);
    assert_eq!(app.form.value(FieldId::Alias), "Alice");
    assert!(app.accounts.is_empty());
    let (text, level) = app.status_text().unwrap();
    assert_eq!(level, StatusLevel::Error);
    assert!(text.contains("database is locked"));
}

#[test]
fn test_key_failure_never_reaches_store() {
    let pipeline = AccountPipeline::new(NoEntropy, RecordingStore::default());
    let mut app = App::new();

    start_with_alias(&mut app, &pipeline, "Bob");
    app.handle_key(key(KeyCode::Up), &pipeline);
    let before = app.form.clone();
    app.handle_key(key(KeyCode::Enter), &pipeline);

    assert!(pipeline.store().saved.borrow().is_empty());
    assert_eq!(app.form, before);
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Error));
}

#[test]
fn test_memo_enter_does_not_submit() {
    let mut router = InputRouter::new();
    let mut form = FormState::new();
    router.handle(key(KeyCode::Tab), &mut form);
    router.handle(key(KeyCode::Enter), &mut form);
    for _ in 0..3 {
        form.move_focus(Direction::Next);
    }
    assert_eq!(form.focused(), Some(FieldId::Memo));

    router.handle(key(KeyCode::Char('x')), &mut form);
    let action = router.handle(key(KeyCode::Enter), &mut form);

    assert_eq!(action, Action::None);
    assert_eq!(form.value(FieldId::Memo), "x\n");
    assert_eq!(form.focused(), Some(FieldId::Memo));
}

#[test]
fn test_submit_carries_literal_values() {
    let mut router = InputRouter::new();
    let mut form = FormState::new();
    router.handle(key(KeyCode::Tab), &mut form);
    router.handle(key(KeyCode::Enter), &mut form);

    let values = [" Alice ", "ethereum", " a, ,b", "line"];
    for value in values {
        for ch in value.chars() {
            router.handle(key(KeyCode::Char(ch)), &mut form);
        }
        // Enter advances from every single-line field; Tab leaves the memo
        router.handle(key(KeyCode::Tab), &mut form);
    }
    assert_eq!(form.focused(), Some(FieldId::Submit));

    let action = router.handle(key(KeyCode::Enter), &mut form);
    assert_eq!(
        action,
        Action::Submit(AccountSubmitted {
            alias: " Alice ".into(),
            chain: "ethereum".into(),
            label: " a, ,b".into(),
            memo: "line".into(),
        })
    );
    // the form does not reset itself
    assert_eq!(form.value(FieldId::Alias), " Alice ");
}

#[test]
fn test_end_to_end_with_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.sqlite3");
    let store = SqliteAccountStore::open(&path).unwrap();
    store.migrate().unwrap();
    let pipeline = AccountPipeline::new(StubKeys, store);
    let mut app = App::new();

    start_with_alias(&mut app, &pipeline, "Carol");
    app.handle_key(key(KeyCode::Down), &pipeline);
    app.handle_key(key(KeyCode::Down), &pipeline);
    type_text(&mut app, &pipeline, "  hot, ops ,,cold");
    app.handle_key(key(KeyCode::Up), &pipeline);
    app.handle_key(key(KeyCode::Up), &pipeline);
    app.handle_key(key(KeyCode::Up), &pipeline);
    assert_eq!(app.form.focused(), Some(FieldId::Submit));
    app.handle_key(key(KeyCode::Enter), &pipeline);

    let stored = pipeline.accounts().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].alias, "Carol");
    assert_eq!(stored[0].labels, vec!["hot", "ops", "", "cold"]);
    assert!(stored[0].created_at.is_some());
    assert_eq!(app.accounts, stored);
}
