//! Status bar and popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::{AppState, FocusTarget, PendingAction, ViewMode};

/// Render the one-row status bar
pub fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let editor = &state.editor;

    let file = editor
        .path()
        .map(|p| {
            p.strip_prefix(&state.root)
                .unwrap_or(p)
                .display()
                .to_string()
        })
        .unwrap_or_else(|| "[no file]".to_string());
    let modified = if editor.is_modified() { " [+]" } else { "" };
    let focus = match state.focus_target {
        FocusTarget::Tree => "TREE",
        FocusTarget::Editor => "EDIT",
    };
    let branch = state
        .branch
        .as_deref()
        .map(|b| format!(" \u{e0a0} {} |", b))
        .unwrap_or_default();

    let right = format!(
        "{}{} | {} | Ln {}, Col {} ",
        file,
        modified,
        editor.mode().display_name(),
        editor.cursor_line() + 1,
        editor.cursor_col() + 1
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(right.width() as u16),
        ])
        .split(area);

    let message = state.message.as_deref().unwrap_or("Tab: editor  Esc: tree");
    let left = Line::from(vec![
        Span::styled(
            format!(" {} ", focus),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(branch, Style::default().fg(Color::Green)),
        Span::raw(format!(" {}", message)),
    ]);

    let bar_style = Style::default().bg(Color::Rgb(40, 44, 52));
    frame.render_widget(Paragraph::new(left).style(bar_style), chunks[0]);
    frame.render_widget(Paragraph::new(right).style(bar_style), chunks[1]);
}

/// Render the popup for the current modal mode, if any
pub fn render_popup(frame: &mut Frame, state: &AppState) {
    match &state.mode {
        ViewMode::Input {
            purpose,
            buffer,
            cursor,
        } => {
            let shown = if purpose.is_secret() {
                "*".repeat(buffer.chars().count())
            } else {
                buffer.clone()
            };
            draw_input_popup(frame, &purpose.title(), &shown, *cursor);
        }
        ViewMode::Confirm { action } => draw_confirm_popup(frame, action),
        ViewMode::Notice { message } => draw_notice_popup(frame, message),
        _ => {}
    }
}

/// Draw a single-line input popup with the cursor placed in it
fn draw_input_popup(frame: &mut Frame, title: &str, content: &str, cursor: usize) {
    let area = centered_rect(60, 3, frame.area());
    let inner_width = area.width.saturating_sub(2) as usize;

    // Scroll so the cursor stays inside the box
    let before: String = content.chars().take(cursor).collect();
    let cursor_col = before.width();
    let skip_cols = (cursor_col + 1).saturating_sub(inner_width);
    let mut skipped = 0;
    let visible: String = content
        .chars()
        .skip_while(|c| {
            let take = skipped < skip_cols;
            if take {
                skipped += unicode_width::UnicodeWidthChar::width(*c).unwrap_or(0);
            }
            take
        })
        .collect();

    let input = Paragraph::new(visible)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(input, area);
    frame.set_cursor_position(Position::new(
        area.x + 1 + (cursor_col - skipped) as u16,
        area.y + 1,
    ));
}

/// Draw yes/no confirmation popup
fn draw_confirm_popup(frame: &mut Frame, action: &PendingAction) {
    let content = vec![
        Line::from(action.question()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" yes, "),
            Span::styled(
                "n",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" no"),
        ]),
    ];

    let area = centered_rect(60, content.len() as u16 + 2, frame.area());
    let popup = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Draw an outcome notice; git errors can span several lines
fn draw_notice_popup(frame: &mut Frame, message: &str) {
    let screen = frame.area();
    let width = (screen.width as usize * 60 / 100).saturating_sub(2).max(1);
    let body_rows: usize = message
        .lines()
        .map(|l| l.width().div_ceil(width).max(1))
        .sum();
    let height = (body_rows + 4).min(screen.height as usize) as u16;

    let mut content: Vec<Line> = message.lines().map(|l| Line::from(l.to_string())).collect();
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Enter/Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let is_error = message.contains("error") || message.contains("Error");
    let border = if is_error { Color::Red } else { Color::Cyan };

    let area = centered_rect(60, height, screen);
    let popup = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Create a centered rectangle
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
