//! Editor module - Text buffer, file I/O and syntax highlighting

pub mod buffer;
pub mod file;
pub mod syntax;

pub use buffer::EditorBuffer;
pub use file::{is_regular_file, read_text, resolve_input_path, write_text};
pub use syntax::{highlight_content, HighlightCache, StyledLine, StyledSegment, SyntaxMode};
