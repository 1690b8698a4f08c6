//! Screen layout: menu bar, tree | editor split, status bar

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the editor's line-number gutter (`{:4} `)
pub const GUTTER_WIDTH: u16 = 5;

/// Rectangles of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub menu_bar: Rect,
    pub tree: Rect,
    pub editor: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Split the terminal area. The tree keeps `tree_width` columns when
    /// the terminal is wide enough, the editor takes the rest.
    pub fn new(area: Rect, tree_width: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let tree_width = tree_width.min(rows[1].width / 2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(tree_width), Constraint::Min(0)])
            .split(rows[1]);

        Self {
            menu_bar: rows[0],
            tree: columns[0],
            editor: columns[1],
            status: rows[2],
        }
    }

    /// Text rows visible in the editor (inside the borders)
    pub fn editor_height(&self) -> usize {
        self.editor.height.saturating_sub(2) as usize
    }

    /// Text columns visible in the editor (inside borders and gutter)
    pub fn editor_width(&self) -> usize {
        self.editor.width.saturating_sub(2 + GUTTER_WIDTH) as usize
    }
}
