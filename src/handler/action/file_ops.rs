//! File operation action handlers
//!
//! Loads files into the editor buffer and writes the buffer back out.

use std::path::Path;

use crate::core::{AppState, FocusTarget, InputPurpose, ViewMode};
use crate::editor::{read_text, resolve_input_path, write_text};

fn prompt(state: &mut AppState, purpose: InputPurpose) {
    state.mode = ViewMode::Input {
        purpose,
        buffer: String::new(),
        cursor: 0,
    };
}

/// File → Open File
pub fn start_open(state: &mut AppState) {
    prompt(state, InputPurpose::OpenFile);
}

/// Replace the buffer with the content of `path`.
///
/// On failure the previous buffer and its path stay as they were.
pub fn open_path(state: &mut AppState, path: &Path) {
    match read_text(path) {
        Ok(text) => {
            state.editor.load(path, text);
            state.set_focus(FocusTarget::Editor);
            state.set_message(format!("Opened {}", path.display()));
            tracing::info!(
                path = %path.display(),
                mode = state.editor.mode().display_name(),
                "opened file"
            );
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "open failed");
            state.notify(format!("Error opening file: {}", e));
        }
    }
}

/// Confirmation of the Open File prompt
pub fn open_input(state: &mut AppState, value: &str) {
    match resolve_input_path(value, &state.root) {
        Some(path) => open_path(state, &path),
        None => tracing::warn!("open cancelled: empty path"),
    }
}

/// File → Save File
///
/// Prompts for a destination when the buffer has no file yet.
pub fn save(state: &mut AppState) {
    match state.editor.path() {
        Some(path) => {
            let path = path.to_path_buf();
            write_buffer(state, &path);
        }
        None => prompt(state, InputPurpose::SaveAs),
    }
}

/// Confirmation of the Save File As prompt
pub fn save_as(state: &mut AppState, value: &str) {
    let Some(path) = resolve_input_path(value, &state.root) else {
        tracing::warn!("save cancelled: empty path");
        return;
    };

    // Associated before writing, so a failed write still targets it next time
    state.editor.set_path(path.clone());
    write_buffer(state, &path);
}

fn write_buffer(state: &mut AppState, path: &Path) {
    match write_text(path, state.editor.text()) {
        Ok(()) => {
            state.editor.mark_saved();
            tracing::info!(
                path = %path.display(),
                bytes = state.editor.text().len(),
                "saved file"
            );
            state.notify("File saved successfully.");
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "save failed");
            state.notify(format!("Error saving file: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::SyntaxMode;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, AppState) {
        let temp = TempDir::new().unwrap();
        let state = AppState::new(temp.path().to_path_buf());
        (temp, state)
    }

    #[test]
    fn test_open_sets_mode_from_suffix() {
        let (temp, mut state) = setup();
        let java = temp.path().join("B.java");
        let txt = temp.path().join("a.txt");
        fs::write(&java, "class B {}").unwrap();
        fs::write(&txt, "plain").unwrap();

        open_path(&mut state, &java);
        assert_eq!(state.editor.mode(), SyntaxMode::Java);
        assert_eq!(state.editor.path(), Some(java.as_path()));

        open_path(&mut state, &txt);
        assert_eq!(state.editor.mode(), SyntaxMode::Plain);
        assert_eq!(state.editor.text(), "plain");
    }

    #[test]
    fn test_open_failure_keeps_buffer() {
        let (temp, mut state) = setup();
        let good = temp.path().join("good.js");
        fs::write(&good, "let x = 1;").unwrap();
        open_path(&mut state, &good);

        open_path(&mut state, &temp.path().join("missing.txt"));

        assert_eq!(state.editor.text(), "let x = 1;");
        assert_eq!(state.editor.path(), Some(good.as_path()));
        match &state.mode {
            ViewMode::Notice { message } => assert!(message.starts_with("Error opening file: ")),
            other => panic!("expected notice, got {:?}", other),
        }
    }

    #[test]
    fn test_open_rejects_non_utf8() {
        let (temp, mut state) = setup();
        let bin = temp.path().join("blob.bin");
        fs::write(&bin, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        open_path(&mut state, &bin);
        assert!(state.editor.path().is_none());
        assert!(matches!(state.mode, ViewMode::Notice { .. }));
    }

    #[test]
    fn test_open_input_resolves_relative_to_root() {
        let (temp, mut state) = setup();
        fs::write(temp.path().join("rel.xml"), "<a/>").unwrap();
        open_input(&mut state, "rel.xml");
        assert_eq!(state.editor.mode(), SyntaxMode::Xml);
        assert_eq!(state.editor.text(), "<a/>");
    }

    #[test]
    fn test_save_without_path_prompts() {
        let (_temp, mut state) = setup();
        save(&mut state);
        assert!(matches!(
            state.mode,
            ViewMode::Input {
                purpose: InputPurpose::SaveAs,
                ..
            }
        ));
    }

    #[test]
    fn test_save_as_associates_and_writes() {
        let (temp, mut state) = setup();
        state.editor.insert_str("hello");
        save_as(&mut state, "out.txt");

        let dest = temp.path().join("out.txt");
        assert_eq!(fs::read_to_string(&dest).unwrap(), "hello");
        assert_eq!(state.editor.path(), Some(dest.as_path()));
        assert_eq!(state.editor.mode(), SyntaxMode::Java);
        assert!(!state.editor.is_modified());
        assert_eq!(
            state.mode,
            ViewMode::Notice {
                message: "File saved successfully.".to_string()
            }
        );

        // Later saves go straight to the file
        state.mode = ViewMode::Browse;
        state.editor.insert_str("!");
        save(&mut state);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "hello!");
    }

    #[test]
    fn test_save_as_blank_is_noop() {
        let (_temp, mut state) = setup();
        save_as(&mut state, "   ");
        assert!(state.editor.path().is_none());
        assert_eq!(state.mode, ViewMode::Browse);
    }

    #[test]
    fn test_save_error_reports() {
        let (temp, mut state) = setup();
        save_as(&mut state, &temp.path().join("no/such/dir/x.txt").to_string_lossy());
        match &state.mode {
            ViewMode::Notice { message } => assert!(message.starts_with("Error saving file: ")),
            other => panic!("expected notice, got {:?}", other),
        }
        assert!(state.editor.path().is_some());
    }
}
