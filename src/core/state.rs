//! Application state management

use std::path::PathBuf;

use super::{FocusTarget, ViewMode};
use crate::editor::{EditorBuffer, SyntaxMode};
use crate::git::{GitRepo, DEFAULT_REMOTE};

/// Default tree pane width in columns
pub const DEFAULT_TREE_WIDTH: u16 = 30;

/// Default display width of a tab character
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Main application state
pub struct AppState {
    /// Project root directory
    pub root: PathBuf,
    /// Current focus index in visible tree entries
    pub focus_index: usize,
    /// Top of tree viewport (scroll position)
    pub viewport_top: usize,
    /// Current view mode
    pub mode: ViewMode,
    /// Pane receiving keys in browse mode
    pub focus_target: FocusTarget,
    /// Status message
    pub message: Option<String>,
    /// The single text buffer
    pub editor: EditorBuffer,
    /// Repository handle, absent until opened or initialized
    pub repo: Option<GitRepo>,
    /// Whether the startup open-or-init step has run
    pub repo_checked: bool,
    /// Checked-out branch, cached for the status bar
    pub branch: Option<String>,
    /// Remote name used by push, pull and connect
    pub remote_name: String,
    /// Tree pane width in columns
    pub tree_width: u16,
    /// Display width of a tab character
    pub tab_width: usize,
}

impl AppState {
    /// Create new application state with default settings.
    ///
    /// The repository is NOT looked up here; the event loop does that after
    /// the first frame so the confirmation can be drawn over the UI.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            focus_index: 0,
            viewport_top: 0,
            mode: ViewMode::Browse,
            focus_target: FocusTarget::Tree,
            message: None,
            editor: EditorBuffer::new(SyntaxMode::Java),
            repo: None,
            repo_checked: false,
            branch: None,
            remote_name: DEFAULT_REMOTE.to_string(),
            tree_width: DEFAULT_TREE_WIDTH,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Adjust viewport to keep focus visible
    pub fn adjust_viewport(&mut self, visible_height: usize) {
        if self.focus_index < self.viewport_top {
            self.viewport_top = self.focus_index;
        } else if self.focus_index >= self.viewport_top + visible_height {
            self.viewport_top = self.focus_index.saturating_sub(visible_height) + 1;
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Show a modal notice
    pub fn notify(&mut self, msg: impl Into<String>) {
        self.mode = ViewMode::Notice {
            message: msg.into(),
        };
    }

    /// Re-read the checked-out branch name
    pub fn refresh_branch(&mut self) {
        self.branch = self.repo.as_ref().and_then(|r| r.current_branch().ok());
    }

    /// Toggle focus between tree and editor
    pub fn toggle_focus(&mut self) {
        self.focus_target = match self.focus_target {
            FocusTarget::Tree => FocusTarget::Editor,
            FocusTarget::Editor => FocusTarget::Tree,
        };
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus_target = target;
    }
}
