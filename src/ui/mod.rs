use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;

use crate::app::{App, StatusLevel};
use crate::core::{Pane, KEY_HELP};
use crate::domain::AccountRecord;
use crate::modules::form::{Field, FieldId};

const FOCUS_COLOR: Color = Color::Rgb(0xf0, 0xb9, 0x0b);
const INPUT_FOCUS_COLOR: Color = Color::Rgb(0xf9, 0xe7, 0x9f);
const MUTED_COLOR: Color = Color::Indexed(237);

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_form_pane(f, areas.left, app);
    draw_accounts_pane(f, areas.right, app);
    draw_help_line(f, areas.help_line, app);
    draw_status_line(f, areas.status_line, app);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

fn draw_form_pane(f: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("New account", app.pane() == Pane::Left);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = layout::form_rows(inner);
    for (field, row) in app.form.fields().iter().zip(rows) {
        match field.id() {
            FieldId::Submit => draw_button(f, row, field),
            _ => draw_input(f, row, field, app.pane() == Pane::Left),
        }
    }
}

fn draw_input(f: &mut Frame, area: Rect, field: &Field, pane_focused: bool) {
    let border_style = if field.is_focused() {
        Style::default().fg(INPUT_FOCUS_COLOR)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field.id().title())
        .border_style(border_style);
    let inner = block.inner(area);

    let Some(editor) = field.editor() else {
        return;
    };
    let (row, col) = editor.cursor_position();
    let row_offset = (row as u16).saturating_sub(inner.height.saturating_sub(1));
    let col_offset = (col as u16).saturating_sub(inner.width.saturating_sub(1));

    let paragraph = if editor.value().is_empty() && !field.is_focused() {
        Paragraph::new(Span::styled(
            field.id().title(),
            Style::default().fg(MUTED_COLOR),
        ))
    } else {
        Paragraph::new(editor.value()).scroll((row_offset, col_offset))
    };
    f.render_widget(paragraph.block(block), area);

    if field.is_focused() && pane_focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor(
            inner.x + (col as u16 - col_offset),
            inner.y + (row as u16 - row_offset),
        );
    }
}

fn draw_button(f: &mut Frame, area: Rect, field: &Field) {
    let border_style = if field.is_focused() {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(MUTED_COLOR)
    };
    let text_style = if field.is_focused() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let button = Paragraph::new(Span::styled(field.id().title(), text_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
    f.render_widget(button, area);
}

fn draw_accounts_pane(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.pane() == Pane::Right;
    let title = format!("Accounts ({})", app.accounts.len());
    let block = pane_block(&title, focused);

    if app.accounts.is_empty() {
        let hint = Paragraph::new(Text::from(vec![
            Line::from("No accounts yet"),
            Line::from(""),
            Line::from(Span::styled(
                "tab: go to the form   enter: start typing",
                Style::default().fg(Color::DarkGray),
            )),
        ]))
        .block(block)
        .wrap(Wrap { trim: true });
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app.accounts.iter().map(account_item).collect();
    let highlight_style = if focused {
        Style::default().fg(Color::Black).bg(FOCUS_COLOR)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_account));
    f.render_stateful_widget(list, area, &mut state);
}

fn account_item(account: &AccountRecord) -> ListItem<'static> {
    let id = account
        .id
        .map(|id| format!("#{id}"))
        .unwrap_or_else(|| "#-".to_string());
    let created = account
        .created_at
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    let mut header = vec![
        Span::styled(id, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(
            display_or_dash(&account.alias),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(display_or_dash(&account.chain), Style::default().fg(Color::LightCyan)),
    ];
    if !created.is_empty() {
        header.push(Span::raw("  "));
        header.push(Span::styled(created, Style::default().fg(Color::DarkGray)));
    }

    let mut lines = vec![Line::from(header), Line::from(format!("   {}", account.address))];
    if !account.labels.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("   labels ", Style::default().fg(Color::DarkGray)),
            Span::raw(account.labels.join(" · ")),
        ]));
    }
    if let Some(first) = account.memo.lines().find(|line| !line.trim().is_empty()) {
        lines.push(Line::from(vec![
            Span::styled("   memo ", Style::default().fg(Color::DarkGray)),
            Span::raw(truncate_str(first, 60)),
        ]));
    }
    ListItem::new(Text::from(lines))
}

fn draw_help_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (key, desc) in KEY_HELP {
        spans.push(Span::styled(key, Style::default().fg(MUTED_COLOR)));
        spans.push(Span::styled(
            format!(" {desc}  "),
            Style::default().fg(Color::Indexed(251)),
        ));
    }
    if app.pane() == Pane::Right {
        spans.push(Span::styled("y", Style::default().fg(MUTED_COLOR)));
        spans.push(Span::styled(" copy address", Style::default().fg(Color::Indexed(251))));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let content = if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::LightYellow,
            StatusLevel::Error => Color::LightRed,
        };
        Line::from(vec![
            Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), Style::default().fg(color)),
        ])
    } else {
        Line::from(vec![
            Span::styled("Pane ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}  ", app.pane().title())),
            Span::styled("Field ", Style::default().fg(Color::DarkGray)),
            Span::raw(
                app.form
                    .focused()
                    .map(|id| id.title())
                    .unwrap_or("--")
                    .to_string(),
            ),
        ])
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn display_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn truncate_str(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    value.chars().take(max).collect::<String>() + "…"
}
