//! Account creation form - ordered fields with single-field focus

mod editor;

pub use editor::TextEditor;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::core::{AccountSubmitted, Action};

/// Field identity, doubling as its position in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Alias,
    Chain,
    Label,
    Memo,
    Submit,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Alias,
        FieldId::Chain,
        FieldId::Label,
        FieldId::Memo,
        FieldId::Submit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            FieldId::Alias => "Alias",
            FieldId::Chain => "Chain",
            FieldId::Label => "Label",
            FieldId::Memo => "Memo",
            FieldId::Submit => "Create",
        }
    }
}

/// What a field can do with input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text(TextEditor),
    Button,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: FieldId,
    kind: FieldKind,
    focused: bool,
}

impl Field {
    fn text(id: FieldId, editor: TextEditor) -> Self {
        Self {
            id,
            kind: FieldKind::Text(editor),
            focused: false,
        }
    }

    fn button(id: FieldId) -> Self {
        Self {
            id,
            kind: FieldKind::Button,
            focused: false,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_multiline(&self) -> bool {
        matches!(&self.kind, FieldKind::Text(editor) if editor.is_multiline())
    }

    pub fn editor(&self) -> Option<&TextEditor> {
        match &self.kind {
            FieldKind::Text(editor) => Some(editor),
            FieldKind::Button => None,
        }
    }

    /// Current text; empty for the button.
    pub fn value(&self) -> &str {
        self.editor().map(TextEditor::value).unwrap_or("")
    }
}

/// Focus direction for [`FormState::move_focus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// The left-pane form.
///
/// Invariant: `last_focused` is `None` and no field is focused, or it is the
/// index of the one and only focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<Field>,
    last_focused: Option<usize>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub const ALIAS_LIMIT: usize = 50;
    pub const CHAIN_LIMIT: usize = 50;
    pub const LABEL_LIMIT: usize = 100;
    pub const MEMO_LIMIT: usize = 500;

    /// Empty form with nothing focused.
    pub fn new() -> Self {
        let fields = vec![
            Field::text(FieldId::Alias, TextEditor::single_line(Self::ALIAS_LIMIT)),
            Field::text(FieldId::Chain, TextEditor::single_line(Self::CHAIN_LIMIT)),
            Field::text(FieldId::Label, TextEditor::single_line(Self::LABEL_LIMIT)),
            Field::text(FieldId::Memo, TextEditor::multi_line(Self::MEMO_LIMIT)),
            Field::button(FieldId::Submit),
        ];
        Self {
            fields,
            last_focused: None,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).value()
    }

    /// The focused field, `None` for the no-focus state.
    pub fn focused(&self) -> Option<FieldId> {
        self.last_focused.and_then(FieldId::from_index)
    }

    pub fn has_focus(&self) -> bool {
        self.last_focused.is_some()
    }

    pub fn activate_first(&mut self) {
        self.focus_index(FieldId::Alias.index());
    }

    /// Move focus one field forward or back, wrapping at both ends.
    /// Does nothing while no field is focused.
    pub fn move_focus(&mut self, direction: Direction) {
        let Some(current) = self.last_focused else {
            debug!("move_focus ignored: no field focused");
            return;
        };
        let len = self.fields.len();
        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Prev => (current + len - 1) % len,
        };
        self.focus_index(next);
    }

    pub fn blur_all(&mut self) {
        for field in &mut self.fields {
            field.focused = false;
        }
        self.last_focused = None;
    }

    /// Forward a key to the focused field.
    ///
    /// Text fields hand it to their editor; the Create button turns Enter
    /// into [`Action::Submit`]. Dropped when nothing is focused.
    pub fn route_event(&mut self, key: KeyEvent) -> Action {
        let Some(index) = self.last_focused else {
            return Action::None;
        };
        if matches!(self.fields[index].kind, FieldKind::Button) {
            return match key.code {
                KeyCode::Enter => Action::Submit(self.submission()),
                _ => Action::None,
            };
        }
        if let FieldKind::Text(editor) = &mut self.fields[index].kind {
            editor.handle_key(key);
        }
        Action::None
    }

    /// Current literal values of the four data fields.
    pub fn submission(&self) -> AccountSubmitted {
        AccountSubmitted {
            alias: self.value(FieldId::Alias).to_string(),
            chain: self.value(FieldId::Chain).to_string(),
            label: self.value(FieldId::Label).to_string(),
            memo: self.value(FieldId::Memo).to_string(),
        }
    }

    fn focus_index(&mut self, index: usize) {
        self.blur_all();
        self.fields[index].focused = true;
        self.last_focused = Some(index);
        debug!(field = ?self.fields[index].id, "focus");
    }
}
