//! Syntax modes and highlighting
//!
//! The mode is chosen from the file name suffix alone. Highlighting itself
//! is delegated to syntect's bundled grammars.

use std::path::Path;
use std::sync::OnceLock;

use ratatui::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{
    HighlightIterator, HighlightState, Highlighter, Style, Theme, ThemeSet,
};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::EditorBuffer;

/// Lazy-initialized syntax set
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();

/// Lazy-initialized theme (base16-ocean.dark)
static THEME: OnceLock<Theme> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> &'static Theme {
    THEME.get_or_init(|| {
        let ts = ThemeSet::load_defaults();
        ts.themes["base16-ocean.dark"].clone()
    })
}

/// Highlighting mode of the editor pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SyntaxMode {
    /// No highlighting
    #[default]
    Plain,
    Java,
    Xml,
    Html,
    JavaScript,
}

impl SyntaxMode {
    /// Pick a mode from the file name suffix (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".java") {
            SyntaxMode::Java
        } else if name.ends_with(".xml") {
            SyntaxMode::Xml
        } else if name.ends_with(".html") || name.ends_with(".htm") {
            SyntaxMode::Html
        } else if name.ends_with(".js") {
            SyntaxMode::JavaScript
        } else {
            SyntaxMode::Plain
        }
    }

    /// Parse a mode name as written in the config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "plain" | "none" | "text" => Some(SyntaxMode::Plain),
            "java" => Some(SyntaxMode::Java),
            "xml" => Some(SyntaxMode::Xml),
            "html" => Some(SyntaxMode::Html),
            "javascript" | "js" => Some(SyntaxMode::JavaScript),
            _ => None,
        }
    }

    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            SyntaxMode::Plain => "Plain",
            SyntaxMode::Java => "Java",
            SyntaxMode::Xml => "XML",
            SyntaxMode::Html => "HTML",
            SyntaxMode::JavaScript => "JavaScript",
        }
    }

    fn syntax(&self) -> Option<&'static SyntaxReference> {
        let ext = match self {
            SyntaxMode::Plain => return None,
            SyntaxMode::Java => "java",
            SyntaxMode::Xml => "xml",
            SyntaxMode::Html => "html",
            SyntaxMode::JavaScript => "js",
        };
        get_syntax_set().find_syntax_by_extension(ext)
    }
}

/// A segment of styled text (text with color)
#[derive(Debug, Clone)]
pub struct StyledSegment {
    pub text: String,
    pub color: Color,
}

/// A line with syntax highlighting
#[derive(Debug, Clone)]
pub struct StyledLine {
    pub segments: Vec<StyledSegment>,
}

fn styled_line(ranges: &[(Style, &str)]) -> StyledLine {
    let segments = ranges
        .iter()
        .map(|(style, text)| StyledSegment {
            text: text.trim_end_matches(['\n', '\r']).to_string(),
            color: Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b),
        })
        .filter(|s| !s.text.is_empty())
        .collect();
    StyledLine { segments }
}

/// Highlight `content` line by line. Returns None for plain mode.
pub fn highlight_content(content: &str, mode: SyntaxMode) -> Option<Vec<StyledLine>> {
    let syntax = mode.syntax()?;
    let ss = get_syntax_set();
    let mut h = HighlightLines::new(syntax, get_theme());
    let mut styled_lines = Vec::new();

    for line in LinesWithEndings::from(content) {
        let ranges = h.highlight_line(line, ss).ok()?;
        styled_lines.push(styled_line(&ranges));
    }

    Some(styled_lines)
}

/// Incremental highlighter for the editor buffer.
///
/// Parser state is kept at the start of every highlighted line. After an
/// edit, highlighting resumes from the first changed line and only runs as
/// far as the caller asks (the bottom of the visible window).
#[derive(Default)]
pub struct HighlightCache {
    key: Option<(u64, SyntaxMode)>,
    /// Buffer lines (with endings) as of the last call
    source: Vec<String>,
    /// Highlighted prefix of `source`
    lines: Vec<StyledLine>,
    /// `states[i]` is the state before line `i`; one longer than `lines`
    states: Vec<(ParseState, HighlightState)>,
}

impl HighlightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted lines for `buffer`, covering at least its first `upto`
    /// lines. Lines past the returned slice have not been highlighted yet.
    pub fn lines_for(&mut self, buffer: &EditorBuffer, upto: usize) -> Option<&[StyledLine]> {
        let mode = buffer.mode();
        let Some(syntax) = mode.syntax() else {
            *self = Self::default();
            return None;
        };

        let key = (buffer.revision(), mode);
        if self.key != Some(key) {
            if self.key.map(|(_, m)| m) != Some(mode) {
                self.source.clear();
                self.lines.clear();
                self.states.clear();
            }
            self.key = Some(key);
            self.sync_source(buffer.text());
        }

        let highlighter = Highlighter::new(get_theme());
        if self.states.is_empty() {
            let initial = HighlightState::new(&highlighter, ScopeStack::new());
            self.states.push((ParseState::new(syntax), initial));
        }

        let target = upto.min(self.source.len());
        while self.lines.len() < target {
            let i = self.lines.len();
            let Some((mut parse, mut highlight)) = self.states.get(i).cloned() else {
                break;
            };
            let line = &self.source[i];
            let ops = match parse.parse_line(line, get_syntax_set()) {
                Ok(ops) => ops,
                Err(e) => {
                    tracing::debug!(line = i, error = %e, "highlighting stopped");
                    break;
                }
            };
            let ranges: Vec<(Style, &str)> =
                HighlightIterator::new(&mut highlight, &ops, line, &highlighter).collect();
            self.lines.push(styled_line(&ranges));
            self.states.push((parse, highlight));
        }

        Some(&self.lines)
    }

    /// Replace `source` with the lines of `text` and drop highlighting from
    /// the first line that differs.
    fn sync_source(&mut self, text: &str) {
        let new: Vec<String> = LinesWithEndings::from(text).map(str::to_string).collect();
        let first_diff = self
            .source
            .iter()
            .zip(&new)
            .position(|(old, new)| old != new)
            .unwrap_or_else(|| self.source.len().min(new.len()));

        self.lines.truncate(first_diff);
        self.states.truncate(first_diff + 1);
        self.source = new;
    }

    /// Number of lines highlighted so far
    pub fn highlighted_len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mode_from_suffix() {
        assert_eq!(SyntaxMode::from_path(Path::new("b.java")), SyntaxMode::Java);
        assert_eq!(SyntaxMode::from_path(Path::new("POM.XML")), SyntaxMode::Xml);
        assert_eq!(SyntaxMode::from_path(Path::new("index.htm")), SyntaxMode::Html);
        assert_eq!(SyntaxMode::from_path(Path::new("index.HTML")), SyntaxMode::Html);
        assert_eq!(
            SyntaxMode::from_path(Path::new("/x/app.js")),
            SyntaxMode::JavaScript
        );
        assert_eq!(SyntaxMode::from_path(Path::new("a.txt")), SyntaxMode::Plain);
        assert_eq!(SyntaxMode::from_path(Path::new("Makefile")), SyntaxMode::Plain);
        assert_eq!(SyntaxMode::from_path(Path::new("app.json")), SyntaxMode::Plain);
        assert_eq!(SyntaxMode::from_path(&PathBuf::new()), SyntaxMode::Plain);
    }

    #[test]
    fn test_mode_from_name() {
        assert_eq!(SyntaxMode::from_name("java"), Some(SyntaxMode::Java));
        assert_eq!(SyntaxMode::from_name(" JS "), Some(SyntaxMode::JavaScript));
        assert_eq!(SyntaxMode::from_name("plain"), Some(SyntaxMode::Plain));
        assert_eq!(SyntaxMode::from_name("cobol"), None);
    }

    #[test]
    fn test_plain_mode_is_not_highlighted() {
        assert!(highlight_content("hello\nworld\n", SyntaxMode::Plain).is_none());
    }

    #[test]
    fn test_java_highlighting_keeps_text() {
        let src = "public class A {\n    int x = 1;\n}\n";
        let lines = highlight_content(src, SyntaxMode::Java).unwrap();
        assert_eq!(lines.len(), 3);

        let first: String = lines[0].segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(first, "public class A {");
        assert!(lines[0].segments.len() > 1);
    }

    fn plain_text(line: &StyledLine) -> String {
        line.segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_cache_recomputes_on_change() {
        let mut buffer = EditorBuffer::new(SyntaxMode::Java);
        let mut cache = HighlightCache::new();
        assert!(cache.lines_for(&buffer, 10).unwrap().is_empty());

        buffer.insert_str("int x;");
        assert_eq!(cache.lines_for(&buffer, 10).unwrap().len(), 1);

        buffer.set_mode(SyntaxMode::Plain);
        assert!(cache.lines_for(&buffer, 10).is_none());
    }

    #[test]
    fn test_cache_stops_at_requested_line() {
        let mut buffer = EditorBuffer::new(SyntaxMode::Java);
        buffer.insert_str(&"int x = 1;\n".repeat(100));
        let mut cache = HighlightCache::new();

        assert_eq!(cache.lines_for(&buffer, 20).unwrap().len(), 20);
        assert_eq!(cache.lines_for(&buffer, 50).unwrap().len(), 50);
        assert_eq!(cache.lines_for(&buffer, 1000).unwrap().len(), 100);
    }

    #[test]
    fn test_edit_keeps_lines_above_and_matches_full_highlight() {
        let src = "class A {\n    /* open\n    still comment */\n    int y;\n}\n";
        let mut buffer = EditorBuffer::new(SyntaxMode::Plain);
        buffer.load(Path::new("A.java"), src.to_string());
        let mut cache = HighlightCache::new();
        cache.lines_for(&buffer, 100);

        // Close the comment early: later lines must be re-highlighted
        buffer.move_down();
        buffer.move_end();
        buffer.insert_str(" */");
        cache.sync_source(buffer.text());
        assert_eq!(cache.highlighted_len(), 1);

        let incremental: Vec<String> = cache
            .lines_for(&buffer, 100)
            .unwrap()
            .iter()
            .map(plain_text)
            .collect();
        let full: Vec<String> = highlight_content(buffer.text(), SyntaxMode::Java)
            .unwrap()
            .iter()
            .map(plain_text)
            .collect();
        assert_eq!(incremental, full);

        let colors = |lines: &[StyledLine]| -> Vec<Vec<Color>> {
            lines
                .iter()
                .map(|l| l.segments.iter().map(|s| s.color).collect())
                .collect()
        };
        let full_lines = highlight_content(buffer.text(), SyntaxMode::Java).unwrap();
        assert_eq!(colors(cache.lines_for(&buffer, 100).unwrap()), colors(&full_lines));
    }
}
