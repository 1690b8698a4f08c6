//! View mode definitions

use super::MenuKind;

/// Current view/input mode with embedded state.
///
/// Every mode other than `Browse` is modal: it captures all input until it
/// is confirmed or cancelled.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewMode {
    /// Normal tree/editor interaction
    #[default]
    Browse,
    /// A drop-down menu is open
    Menu { menu: MenuKind, selected: usize },
    /// Text prompt
    Input {
        purpose: InputPurpose,
        buffer: String,
        /// Cursor position in chars
        cursor: usize,
    },
    /// Yes/no question
    Confirm { action: PendingAction },
    /// Outcome notice, dismissed with Enter or Esc
    Notice { message: String },
}

/// Which remote operation a credential prompt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    Push,
    Pull,
}

impl RemoteOp {
    pub fn display_name(&self) -> &'static str {
        match self {
            RemoteOp::Push => "Push",
            RemoteOp::Pull => "Pull",
        }
    }
}

/// Purpose of text input
#[derive(Debug, Clone, PartialEq)]
pub enum InputPurpose {
    /// Project directory chosen at startup
    ProjectDir,
    /// File → Open File
    OpenFile,
    /// Destination for a buffer with no associated file
    SaveAs,
    /// Git → Commit
    CommitMessage,
    /// Git → Connect to Remote
    RemoteUrl,
    /// First credential prompt of a push/pull
    Username { op: RemoteOp },
    /// Second credential prompt of a push/pull
    Password { op: RemoteOp, username: String },
}

impl InputPurpose {
    /// Prompt title shown on the popup border
    pub fn title(&self) -> String {
        match self {
            InputPurpose::ProjectDir => "Open project directory".to_string(),
            InputPurpose::OpenFile => "Open File".to_string(),
            InputPurpose::SaveAs => "Save File As".to_string(),
            InputPurpose::CommitMessage => "Enter commit message:".to_string(),
            InputPurpose::RemoteUrl => "Enter remote repository URL (HTTPS):".to_string(),
            InputPurpose::Username { op } => format!("{}: Username", op.display_name()),
            InputPurpose::Password { op, .. } => {
                format!("{}: Password or Token", op.display_name())
            }
        }
    }

    /// Whether typed text must be masked
    pub fn is_secret(&self) -> bool {
        matches!(self, InputPurpose::Password { .. })
    }
}

/// Action pending confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Create a repository at the project root
    InitRepository,
}

impl PendingAction {
    pub fn question(&self) -> &'static str {
        match self {
            PendingAction::InitRepository => {
                "No Git repository found. Initialize a new repository?"
            }
        }
    }
}

/// Which pane receives keys in `Browse` mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Tree,
    Editor,
}
