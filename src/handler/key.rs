//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{AppState, FocusTarget, MenuItem, MenuKind, ViewMode};

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,

    /// Open a drop-down menu
    OpenMenu(MenuKind),
    /// Move the menu highlight up
    MenuUp,
    /// Move the menu highlight down
    MenuDown,
    /// Switch to the menu on the left
    MenuLeft,
    /// Switch to the menu on the right
    MenuRight,
    /// Run the highlighted menu item
    MenuActivate,
    /// Run a menu command directly (menu click or shortcut)
    RunMenuItem(MenuItem),

    /// Move tree focus up
    MoveUp,
    /// Move tree focus down
    MoveDown,
    /// Move to top
    MoveToTop,
    /// Move to bottom
    MoveToBottom,
    /// Expand the focused directory, or open the focused file
    Expand,
    /// Collapse the focused directory
    Collapse,
    /// Open the focused file, or toggle the focused directory
    Activate,
    /// Move keyboard focus to the editor
    FocusEditor,
    /// Move keyboard focus to the tree
    FocusTree,

    /// Insert a character at the editor cursor
    InsertChar(char),
    InsertNewline,
    InsertTab,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    PageUp,
    PageDown,

    /// Confirm current input
    ConfirmInput { value: String },
    /// Cancel current input/menu
    Cancel,
    /// Answer yes to a confirmation
    ConfirmYes,
    /// Answer no to a confirmation
    ConfirmNo,
    /// Close a notice
    DismissNotice,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    match &state.mode {
        ViewMode::Browse => handle_browse_mode(state, key),
        ViewMode::Menu { .. } => handle_menu_mode(key),
        ViewMode::Input { buffer, .. } => handle_input_mode(key, buffer),
        ViewMode::Confirm { .. } => handle_confirm_mode(key),
        ViewMode::Notice { .. } => handle_notice_mode(key),
    }
}

/// Shortcuts available in browse mode regardless of focus
fn global_shortcut(key: KeyEvent) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::F(10) => Some(KeyAction::OpenMenu(MenuKind::File)),
        KeyCode::Char('o') | KeyCode::Char('O') if ctrl => {
            Some(KeyAction::RunMenuItem(MenuItem::OpenFile))
        }
        KeyCode::Char('s') | KeyCode::Char('S') if ctrl => {
            Some(KeyAction::RunMenuItem(MenuItem::SaveFile))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => {
            Some(KeyAction::RunMenuItem(MenuItem::Exit))
        }
        KeyCode::Char('f') | KeyCode::Char('F') if alt => Some(KeyAction::OpenMenu(MenuKind::File)),
        KeyCode::Char('g') | KeyCode::Char('G') if alt => Some(KeyAction::OpenMenu(MenuKind::Git)),
        _ => None,
    }
}

fn handle_browse_mode(state: &AppState, key: KeyEvent) -> KeyAction {
    if let Some(action) = global_shortcut(key) {
        return action;
    }

    match state.focus_target {
        FocusTarget::Tree => handle_tree_keys(key),
        FocusTarget::Editor => handle_editor_keys(key),
    }
}

fn handle_tree_keys(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::MoveToTop,
        KeyCode::Char('G') | KeyCode::End => KeyAction::MoveToBottom,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Expand,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Collapse,
        KeyCode::Enter => KeyAction::Activate,
        KeyCode::Tab => KeyAction::FocusEditor,
        _ => KeyAction::None,
    }
}

fn handle_editor_keys(key: KeyEvent) -> KeyAction {
    let ctrl_or_alt = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => KeyAction::FocusTree,
        KeyCode::Char(c) if !ctrl_or_alt => KeyAction::InsertChar(c),
        KeyCode::Enter => KeyAction::InsertNewline,
        KeyCode::Tab => KeyAction::InsertTab,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Delete => KeyAction::Delete,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Up => KeyAction::CursorUp,
        KeyCode::Down => KeyAction::CursorDown,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        _ => KeyAction::None,
    }
}

fn handle_menu_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::F(10) => KeyAction::Cancel,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MenuUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MenuDown,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::MenuLeft,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::MenuRight,
        KeyCode::Enter => KeyAction::MenuActivate,
        _ => KeyAction::None,
    }
}

/// Handle keys in input mode (buffer edits are applied separately)
fn handle_input_mode(key: KeyEvent, current_buffer: &str) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::ConfirmInput {
            value: current_buffer.to_string(),
        },
        KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

fn handle_confirm_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::ConfirmYes,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::ConfirmNo,
        _ => KeyAction::None,
    }
}

fn handle_notice_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => KeyAction::DismissNotice,
        _ => KeyAction::None,
    }
}

/// Update input buffer based on key event.
///
/// `cursor` counts chars. Returns the new buffer and cursor, or None if the
/// key does not edit the buffer.
pub fn update_input_buffer(key: KeyEvent, buffer: &str, cursor: usize) -> Option<(String, usize)> {
    let len = buffer.chars().count();
    let cursor = cursor.min(len);
    let byte_at = |n: usize| {
        buffer
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(buffer.len())
    };

    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => {
            let mut new_buffer = buffer.to_string();
            new_buffer.insert(byte_at(cursor), c);
            Some((new_buffer, cursor + 1))
        }
        KeyCode::Backspace if cursor > 0 => {
            let mut new_buffer = buffer.to_string();
            new_buffer.remove(byte_at(cursor - 1));
            Some((new_buffer, cursor - 1))
        }
        KeyCode::Delete if cursor < len => {
            let mut new_buffer = buffer.to_string();
            new_buffer.remove(byte_at(cursor));
            Some((new_buffer, cursor))
        }
        KeyCode::Left if cursor > 0 => Some((buffer.to_string(), cursor - 1)),
        KeyCode::Right if cursor < len => Some((buffer.to_string(), cursor + 1)),
        KeyCode::Home if cursor > 0 => Some((buffer.to_string(), 0)),
        KeyCode::End if cursor < len => Some((buffer.to_string(), len)),
        _ => None,
    }
}
