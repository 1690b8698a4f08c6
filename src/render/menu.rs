//! Menu bar and drop-down rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::{AppState, MenuEntry, MenuKind, ViewMode, MENU_BAR};

/// Column where each menu title starts in the bar
fn title_x(menu: MenuKind) -> u16 {
    let mut x = 1;
    for kind in MENU_BAR {
        if kind == menu {
            break;
        }
        x += kind.title().len() as u16 + 2;
    }
    x
}

/// Render the one-row menu bar
pub fn render_menu_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let open = match state.mode {
        ViewMode::Menu { menu, .. } => Some(menu),
        _ => None,
    };

    let mut spans = vec![Span::raw(" ")];
    for kind in MENU_BAR {
        let style = if open == Some(kind) {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", kind.title()), style));
    }
    spans.push(Span::styled(
        "  F10 menu",
        Style::default().fg(Color::DarkGray),
    ));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(40, 44, 52)));
    frame.render_widget(bar, area);
}

/// Render the open drop-down, if any, just below its title
pub fn render_menu_dropdown(frame: &mut Frame, state: &AppState, bar: Rect) {
    let ViewMode::Menu { menu, selected } = state.mode else {
        return;
    };

    let entries = menu.entries();
    let label_width = entries
        .iter()
        .map(|e| match e {
            MenuEntry::Item(item) => {
                item.label().len() + item.shortcut().map(|s| s.len() + 2).unwrap_or(0)
            }
            MenuEntry::Separator => 0,
        })
        .max()
        .unwrap_or(0);
    let inner_width = label_width + 2;

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            MenuEntry::Item(item) => {
                let shortcut = item.shortcut().unwrap_or("");
                let pad = inner_width.saturating_sub(item.label().len() + shortcut.len() + 2);
                let text = format!(" {}{}{} ", item.label(), " ".repeat(pad), shortcut);
                let style = if i == selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(text, style))
            }
            MenuEntry::Separator => Line::from(Span::styled(
                "─".repeat(inner_width),
                Style::default().fg(Color::DarkGray),
            )),
        })
        .collect();

    let screen = frame.area();
    let x = bar.x + title_x(menu);
    let width = (inner_width as u16 + 2).min(screen.width.saturating_sub(x));
    let height = (entries.len() as u16 + 2).min(screen.height.saturating_sub(bar.y + 1));
    let area = Rect::new(x, bar.y + 1, width, height);

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
