//! Tree rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::core::{AppState, FocusTarget};
use crate::tree::TreeEntry;

/// Render the file tree pane
pub fn render_tree(frame: &mut Frame, state: &AppState, entries: &[&TreeEntry], area: Rect) {
    let height = visible_height(area);
    let tree_focused = state.focus_target == FocusTarget::Tree;

    let items: Vec<ListItem> = entries
        .iter()
        .skip(state.viewport_top)
        .take(height)
        .enumerate()
        .map(|(i, entry)| {
            let absolute_index = state.viewport_top + i;
            render_entry(state, entry, absolute_index == state.focus_index, tree_focused)
        })
        .collect();

    let title = format!(
        " {} ",
        abbreviate_path(&state.root, (area.width as usize).saturating_sub(4))
    );
    let border_style = if tree_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    frame.render_widget(list, area);
}

/// Render a single tree entry as a ListItem
fn render_entry(
    state: &AppState,
    entry: &TreeEntry,
    is_focused: bool,
    tree_focused: bool,
) -> ListItem<'static> {
    let indent = "  ".repeat(entry.depth);

    let icon = if entry.is_dir {
        if entry.is_expanded() {
            "\u{f07c}"
        } else {
            "\u{f07b}"
        }
    } else {
        get_file_icon(&entry.name)
    };

    let is_open = state.editor.path() == Some(entry.path.as_path());
    let open_indicator = if is_open { "•" } else { " " };

    let mut style = if entry.is_dir {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
    };

    if is_focused {
        style = if tree_focused {
            style.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::UNDERLINED)
        };
    }

    let line = Line::from(vec![
        Span::styled(open_indicator, Style::default().fg(Color::Yellow)),
        Span::styled(format!("{}{} {}", indent, icon, entry.name), style),
    ]);

    ListItem::new(line)
}

/// Abbreviate a path to fit within max_width
fn abbreviate_path(path: &std::path::Path, max_width: usize) -> String {
    let full_path = path.display().to_string();

    if full_path.chars().count() <= max_width {
        return full_path;
    }

    let components: Vec<&str> = full_path.split('/').collect();
    let Some((last, parents)) = components.split_last() else {
        return full_path;
    };

    // Shorten each parent to its first char: /home/user/src -> /h/u/src
    let mut abbreviated: Vec<String> = parents
        .iter()
        .map(|c| c.chars().next().map(String::from).unwrap_or_default())
        .collect();
    abbreviated.push((*last).to_string());

    let result = abbreviated.join("/");
    if result.chars().count() <= max_width {
        return result;
    }

    let last_len = last.chars().count();
    if last_len > max_width {
        let tail: String = last
            .chars()
            .skip(last_len.saturating_sub(max_width.saturating_sub(3)))
            .collect();
        format!("...{}", tail)
    } else {
        (*last).to_string()
    }
}

/// Get file icon based on extension
fn get_file_icon(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("");
    match ext.to_lowercase().as_str() {
        "java" => "\u{e738}",
        "js" => "\u{e74e}",
        "html" | "htm" => "\u{e736}",
        "xml" => "\u{f05c0}",
        "md" => "\u{e73e}",
        "txt" => "\u{f15c}",
        _ => "\u{f15b}",
    }
}

/// Calculate visible height for the tree area
pub fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}
