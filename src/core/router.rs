//! Key routing between the two panes and the form fields

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;
use crate::modules::form::{Direction, FieldId, FormState};

/// Which top-level pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The account form
    Left,
    /// The account list
    Right,
}

impl Pane {
    pub fn title(self) -> &'static str {
        match self {
            Pane::Left => "left",
            Pane::Right => "right",
        }
    }
}

/// Key bindings shown in the help line
pub const KEY_HELP: [(&str, &str); 6] = [
    ("ctrl+c", "quit"),
    ("esc", "blur"),
    ("tab", "focus/next"),
    ("↓", "down"),
    ("↑", "up"),
    ("enter", "submit"),
];

/// Turns raw key events into form transitions and app actions.
///
/// Holds the outer pane focus; the field focus lives in [`FormState`].
#[derive(Debug, Clone)]
pub struct InputRouter {
    pane: Pane,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    pub fn new() -> Self {
        Self { pane: Pane::Right }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Handle one key press. Keys that mean nothing in the current state are
    /// dropped and yield [`Action::None`].
    pub fn handle(&mut self, key: KeyEvent, form: &mut FormState) -> Action {
        if is_quit(&key) {
            return Action::Quit;
        }

        match self.pane {
            Pane::Left => self.handle_left(key, form),
            Pane::Right => self.handle_right(key),
        }
    }

    fn handle_left(&mut self, key: KeyEvent, form: &mut FormState) -> Action {
        match key.code {
            KeyCode::Esc => {
                form.blur_all();
                Action::None
            }
            KeyCode::Enter => match form.focused() {
                None => {
                    form.activate_first();
                    Action::None
                }
                // newline in the memo, submit on the button
                Some(FieldId::Memo | FieldId::Submit) => form.route_event(key),
                Some(_) => {
                    form.move_focus(Direction::Next);
                    Action::None
                }
            },
            KeyCode::Tab => {
                if form.has_focus() {
                    form.move_focus(Direction::Next);
                } else {
                    self.pane = Pane::Right;
                }
                Action::None
            }
            KeyCode::Down | KeyCode::Up => match form.focused() {
                None => Action::None,
                Some(FieldId::Memo) => form.route_event(key),
                Some(_) => {
                    let direction = if key.code == KeyCode::Down {
                        Direction::Next
                    } else {
                        Direction::Prev
                    };
                    form.move_focus(direction);
                    Action::None
                }
            },
            _ => form.route_event(key),
        }
    }

    fn handle_right(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.pane = Pane::Left;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
            KeyCode::Char('y') => Action::CopyAddress,
            _ => Action::None,
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
