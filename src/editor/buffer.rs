//! The single editable text buffer

use std::path::{Path, PathBuf};

use super::SyntaxMode;

/// In-memory text shown in the editor pane.
///
/// The cursor is a byte offset into `text` and always sits on a char
/// boundary. Lines are separated by `\n`; a trailing `\r` is kept in the
/// text but treated as part of the line break for cursor movement.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    text: String,
    cursor: usize,
    /// Column to return to when moving vertically through shorter lines
    preferred_col: Option<usize>,
    /// First visible line
    pub scroll: usize,
    /// First visible display column
    pub scroll_col: usize,
    path: Option<PathBuf>,
    mode: SyntaxMode,
    modified: bool,
    revision: u64,
}

impl EditorBuffer {
    /// Create an empty buffer with no associated file
    pub fn new(mode: SyntaxMode) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            preferred_col: None,
            scroll: 0,
            scroll_col: 0,
            path: None,
            mode,
            modified: false,
            revision: 0,
        }
    }

    /// Replace the whole buffer with a freshly read file.
    ///
    /// Any unsaved content is discarded.
    pub fn load(&mut self, path: &Path, text: String) {
        self.text = text;
        self.cursor = 0;
        self.preferred_col = None;
        self.scroll = 0;
        self.scroll_col = 0;
        self.path = Some(path.to_path_buf());
        self.mode = SyntaxMode::from_path(path);
        self.modified = false;
        self.revision += 1;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Associate a file path without touching the content
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn mode(&self) -> SyntaxMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SyntaxMode) {
        self.mode = mode;
    }

    /// Whether the text changed since the last load or save
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Record that the buffer content now matches the file on disk
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Counter bumped on every content change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of lines (an empty buffer has one empty line)
    pub fn line_count(&self) -> usize {
        self.text.bytes().filter(|&b| b == b'\n').count() + 1
    }

    /// Iterate over lines without their line breaks
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    /// Cursor line (0-based)
    pub fn cursor_line(&self) -> usize {
        self.text[..self.cursor]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
    }

    /// Cursor column in chars (0-based)
    pub fn cursor_col(&self) -> usize {
        self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count()
    }

    /// Text between the start of the cursor line and the cursor
    pub fn text_before_cursor_on_line(&self) -> &str {
        &self.text[self.line_start(self.cursor)..self.cursor]
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.touch();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.touch();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the cursor. A `\r\n` pair goes as one.
    pub fn backspace(&mut self) {
        let Some(prev) = self.prev_boundary(self.cursor) else {
            return;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        self.touch();
    }

    /// Delete the char under the cursor. A `\r\n` pair goes as one.
    pub fn delete(&mut self) {
        let Some(next) = self.next_boundary(self.cursor) else {
            return;
        };
        self.text.replace_range(self.cursor..next, "");
        self.touch();
    }

    fn touch(&mut self) {
        self.preferred_col = None;
        self.modified = true;
        self.revision += 1;
    }

    // ------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary(self.cursor) {
            self.cursor = prev;
        }
        self.preferred_col = None;
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary(self.cursor) {
            self.cursor = next;
        }
        self.preferred_col = None;
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
        self.preferred_col = None;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.line_content_end(self.cursor);
        self.preferred_col = None;
    }

    pub fn move_up(&mut self) {
        let col = self.preferred_col.unwrap_or_else(|| self.cursor_col());
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
        } else {
            let prev_start = self.line_start(start - 1);
            self.cursor = self.offset_in_line(prev_start, col);
        }
        self.preferred_col = Some(col);
    }

    pub fn move_down(&mut self) {
        let col = self.preferred_col.unwrap_or_else(|| self.cursor_col());
        match self.text[self.cursor..].find('\n') {
            Some(i) => {
                let next_start = self.cursor + i + 1;
                self.cursor = self.offset_in_line(next_start, col);
            }
            None => self.cursor = self.text.len(),
        }
        self.preferred_col = Some(col);
    }

    pub fn page_up(&mut self, height: usize) {
        for _ in 0..height.max(1) {
            self.move_up();
        }
    }

    pub fn page_down(&mut self, height: usize) {
        for _ in 0..height.max(1) {
            self.move_down();
        }
    }

    /// Adjust the scroll offsets so the cursor stays inside a
    /// `height` x `width` viewport. `cursor_x` is the cursor's display column.
    pub fn ensure_cursor_visible(&mut self, height: usize, width: usize, cursor_x: usize) {
        let line = self.cursor_line();
        if line < self.scroll {
            self.scroll = line;
        } else if height > 0 && line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }

        if cursor_x < self.scroll_col {
            self.scroll_col = cursor_x;
        } else if width > 0 && cursor_x >= self.scroll_col + width {
            self.scroll_col = cursor_x + 1 - width;
        }
    }

    // ------------------------------------------------------------------
    // Offset helpers
    // ------------------------------------------------------------------

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    /// End of the line's content, before any `\r\n` or `\n`
    fn line_content_end(&self, pos: usize) -> usize {
        let end = self.text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.text.len());
        if end > pos && self.text[..end].ends_with('\r') {
            end - 1
        } else {
            end
        }
    }

    /// Offset of char column `col` in the line starting at `start`, clamped
    /// to the line's content
    fn offset_in_line(&self, start: usize, col: usize) -> usize {
        let end = self.line_content_end(start);
        self.text[start..end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }

    fn prev_boundary(&self, pos: usize) -> Option<usize> {
        let before = &self.text[..pos];
        if before.ends_with("\r\n") {
            return Some(pos - 2);
        }
        before.char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self, pos: usize) -> Option<usize> {
        let after = &self.text[pos..];
        if after.starts_with("\r\n") {
            return Some(pos + 2);
        }
        after.chars().next().map(|c| pos + c.len_utf8())
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new(SyntaxMode::default())
    }
}
