//! Editor action handlers
//!
//! Text edits and cursor movement in the buffer

use crate::core::AppState;
use crate::handler::key::KeyAction;

use super::ActionContext;

pub fn handle(action: KeyAction, state: &mut AppState, context: &ActionContext) {
    let editor = &mut state.editor;

    match action {
        KeyAction::InsertChar(c) => editor.insert_char(c),
        KeyAction::InsertNewline => editor.insert_newline(),
        KeyAction::InsertTab => editor.insert_char('\t'),
        KeyAction::Backspace => editor.backspace(),
        KeyAction::Delete => editor.delete(),
        KeyAction::CursorLeft => editor.move_left(),
        KeyAction::CursorRight => editor.move_right(),
        KeyAction::CursorUp => editor.move_up(),
        KeyAction::CursorDown => editor.move_down(),
        KeyAction::CursorHome => editor.move_home(),
        KeyAction::CursorEnd => editor.move_end(),
        KeyAction::PageUp => editor.page_up(context.editor_height),
        KeyAction::PageDown => editor.page_down(context.editor_height),
        _ => {}
    }
}
