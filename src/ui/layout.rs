use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::modules::form::FieldId;

/// Horizontal padding between the two panes
pub const PANE_GAP: u16 = 1;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub left: Rect,
    pub right: Rect,
    pub help_line: Rect,
    pub status_line: Rect,
}

/// Left pane takes a quarter of the window.
pub fn left_width(total: u16) -> u16 {
    total / 4
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_width(size.width)),
            Constraint::Length(PANE_GAP),
            Constraint::Min(0),
        ])
        .split(vertical[0]);

    UiAreas {
        size,
        left: main_chunks[0],
        right: main_chunks[2],
        help_line: vertical[1],
        status_line: vertical[2],
    }
}

/// Height of each form row, borders included.
pub fn field_height(id: FieldId) -> u16 {
    match id {
        FieldId::Memo => 6,
        _ => 3,
    }
}

/// One rect per form field, top to bottom, inside the left pane's border.
pub fn form_rows(inner: Rect) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|id| Constraint::Length(field_height(*id)))
        .collect();
    constraints.push(Constraint::Min(0));

    let mut rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner)
        .to_vec();
    rows.truncate(FieldId::ALL.len());
    rows
}
