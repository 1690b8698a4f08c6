//! Main event loop for the application

use std::io::Stdout;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use crate::app::Config;
use crate::core::{AppState, FocusTarget, InputPurpose, ViewMode};
use crate::editor::{resolve_input_path, EditorBuffer, HighlightCache};
use crate::handler::{
    action::{
        file_ops, handle_action, open_or_prompt_repository, ActionContext, ActionResult,
        EntrySnapshot,
    },
    key::{handle_key_event, update_input_buffer},
};
use crate::render::{cursor_x, visible_height, AppLayout};
use crate::tree::TreeNavigator;

use super::render::{render_frame, render_startup, RenderContext};

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Apply a key to the prompt buffer if it edits it. Returns true if consumed.
fn edit_input(state: &mut AppState, key: KeyEvent) -> bool {
    let ViewMode::Input {
        purpose,
        buffer,
        cursor,
    } = &state.mode
    else {
        return false;
    };

    match update_input_buffer(key, buffer, *cursor) {
        Some((buffer, cursor)) => {
            state.mode = ViewMode::Input {
                purpose: purpose.clone(),
                buffer,
                cursor,
            };
            true
        }
        None => false,
    }
}

/// Insert pasted text into the prompt or the editor
fn handle_paste(state: &mut AppState, text: &str) {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    match &mut state.mode {
        ViewMode::Input { buffer, cursor, .. } => {
            let line = text.lines().next().unwrap_or("");
            let at = buffer
                .char_indices()
                .nth(*cursor)
                .map(|(i, _)| i)
                .unwrap_or(buffer.len());
            buffer.insert_str(at, line);
            *cursor += line.chars().count();
        }
        ViewMode::Browse if state.focus_target == FocusTarget::Editor => {
            state.editor.insert_str(&text);
        }
        _ => {}
    }
}

/// Ask for the project directory before the main UI starts.
///
/// Returns None when the prompt is cancelled or the answer is not a
/// directory.
pub fn pick_project_dir(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    initial: &Path,
) -> anyhow::Result<Option<PathBuf>> {
    let mut state = AppState::new(initial.to_path_buf());
    let prefill = initial.display().to_string();
    state.mode = ViewMode::Input {
        purpose: InputPurpose::ProjectDir,
        cursor: prefill.chars().count(),
        buffer: prefill,
    };

    loop {
        terminal.draw(|frame| render_startup(frame, &state))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press || edit_input(&mut state, key) {
            continue;
        }

        match key.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Enter => {
                let ViewMode::Input { buffer, .. } = &state.mode else {
                    return Ok(None);
                };
                let chosen = resolve_input_path(buffer, initial).filter(|p| p.is_dir());
                return Ok(match chosen {
                    Some(dir) => Some(dir.canonicalize()?),
                    None => None,
                });
            }
            _ => {}
        }
    }
}

/// Run the editor on `root` until the user quits
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
    root: PathBuf,
) -> anyhow::Result<AppResult> {
    let mut state = AppState::new(root.clone());
    state.tree_width = config.tree_width;
    state.tab_width = config.tab_width;
    state.remote_name = config.remote_name.clone();
    state.editor = EditorBuffer::new(config.default_syntax);

    let mut navigator = TreeNavigator::new(&root)?;
    let mut highlight = HighlightCache::new();
    tracing::info!(root = %root.display(), "project opened");

    if let Some(ref file) = config.open_file {
        file_ops::open_path(&mut state, file);
    }

    // Defer the repository check until after the first frame so the
    // confirmation is drawn over the UI
    let mut skip_repo_check_once = true;

    loop {
        if skip_repo_check_once {
            skip_repo_check_once = false;
        } else if !state.repo_checked && matches!(state.mode, ViewMode::Browse) {
            open_or_prompt_repository(&mut state);
        }

        let entries = navigator.visible_entries();
        let snapshots: Vec<EntrySnapshot> = entries
            .iter()
            .map(|e| EntrySnapshot {
                path: e.path.clone(),
                name: e.name.clone(),
                is_dir: e.is_dir,
                depth: e.depth,
            })
            .collect();

        // Ensure focus is within bounds
        if state.focus_index >= snapshots.len() && !snapshots.is_empty() {
            state.focus_index = snapshots.len() - 1;
        }

        // Adjust scrolling before rendering
        let size = terminal.size()?;
        let layout = AppLayout::new(Rect::new(0, 0, size.width, size.height), state.tree_width);
        state.adjust_viewport(visible_height(layout.tree));
        let x = cursor_x(&state.editor, state.tab_width);
        state
            .editor
            .ensure_cursor_visible(layout.editor_height(), layout.editor_width(), x);

        let render_context = RenderContext {
            state: &state,
            entries,
            styled: highlight.lines_for(
                &state.editor,
                state.editor.scroll + layout.editor_height(),
            ),
            layout,
        };
        terminal.draw(|frame| render_frame(frame, render_context))?;

        let action_context = ActionContext {
            editor_height: layout.editor_height(),
        };

        // Handle events (60ms timeout balances responsiveness and CPU usage)
        if !event::poll(Duration::from_millis(60))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Handle input buffer updates first
                if edit_input(&mut state, key) {
                    continue;
                }

                if matches!(state.mode, ViewMode::Browse) {
                    state.clear_message();
                }

                let action = handle_key_event(&state, key);
                let result = handle_action(
                    action,
                    &mut state,
                    &mut navigator,
                    &snapshots,
                    &action_context,
                );

                if let ActionResult::Quit(code) = result {
                    tracing::info!("quit");
                    return Ok(AppResult { exit_code: code });
                }
            }
            Event::Paste(text) => handle_paste(&mut state, &text),
            _ => {}
        }
    }
}
