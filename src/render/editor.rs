//! Editor pane with syntax highlighting

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::editor::{EditorBuffer, StyledLine};

use super::layout::GUTTER_WIDTH;

/// Display width of `text`, with tabs advancing to the next tab stop
pub fn display_width(text: &str, tab_width: usize) -> usize {
    text.chars().fold(0, |col, c| col + char_width(c, col, tab_width))
}

fn char_width(c: char, col: usize, tab_width: usize) -> usize {
    if c == '\t' {
        let tab = tab_width.max(1);
        tab - col % tab
    } else {
        c.width().unwrap_or(0)
    }
}

/// Clip styled text to the columns `[start, start + width)`.
///
/// Tabs become spaces. A wide char cut by either edge is dropped.
fn clip_line(
    pieces: &[(&str, Style)],
    start: usize,
    width: usize,
    tab_width: usize,
) -> Vec<Span<'static>> {
    let end = start + width;
    let mut spans = Vec::new();
    let mut col = 0;

    for (text, style) in pieces {
        let mut out = String::new();
        for c in text.chars() {
            let w = char_width(c, col, tab_width);
            if col >= start && col + w <= end {
                if c == '\t' {
                    out.extend(std::iter::repeat_n(' ', w));
                } else {
                    out.push(c);
                }
            } else if c == '\t' && col + w > start && col < end {
                // Tab straddling the left or right edge
                let visible = (col + w).min(end) - col.max(start);
                out.extend(std::iter::repeat_n(' ', visible));
            }
            col += w;
        }
        if !out.is_empty() {
            spans.push(Span::styled(out, *style));
        }
        if col >= end {
            break;
        }
    }

    spans
}

/// Render the editor pane.
///
/// `styled` holds highlighted lines for the buffer, or None for plain text.
/// Places the terminal cursor when `focused`.
pub fn render_editor(
    frame: &mut Frame,
    editor: &EditorBuffer,
    styled: Option<&[StyledLine]>,
    tab_width: usize,
    focused: bool,
    area: Rect,
) {
    let height = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(2 + GUTTER_WIDTH) as usize;
    let gutter_style = Style::default().fg(Color::DarkGray);

    let lines: Vec<Line> = editor
        .lines()
        .enumerate()
        .skip(editor.scroll)
        .take(height)
        .map(|(i, raw)| {
            let mut spans = vec![Span::styled(format!("{:4} ", i + 1), gutter_style)];
            let pieces: Vec<(&str, Style)> = match styled.and_then(|s| s.get(i)) {
                Some(line) => line
                    .segments
                    .iter()
                    .map(|seg| (seg.text.as_str(), Style::default().fg(seg.color)))
                    .collect(),
                None => vec![(raw, Style::default())],
            };
            spans.extend(clip_line(&pieces, editor.scroll_col, width, tab_width));
            Line::from(spans)
        })
        .collect();

    let title = match editor.path() {
        Some(path) => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        None => "Untitled".to_string(),
    };
    let title = if editor.is_modified() {
        format!(" {} [+] ", title)
    } else {
        format!(" {} ", title)
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(widget, area);

    if focused {
        let x = cursor_x(editor, tab_width).saturating_sub(editor.scroll_col);
        let y = editor.cursor_line().saturating_sub(editor.scroll);
        if x < width && y < height {
            frame.set_cursor_position(Position::new(
                area.x + 1 + GUTTER_WIDTH + x as u16,
                area.y + 1 + y as u16,
            ));
        }
    }
}

/// Display column of the cursor within its line
pub fn cursor_x(editor: &EditorBuffer, tab_width: usize) -> usize {
    display_width(editor.text_before_cursor_on_line(), tab_width)
}
