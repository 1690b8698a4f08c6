//! Core module - Application state, view modes and menus

pub mod menu;
pub mod mode;
pub mod state;

pub use menu::{MenuEntry, MenuItem, MenuKind, MENU_BAR};
pub use mode::{FocusTarget, InputPurpose, PendingAction, RemoteOp, ViewMode};
pub use state::{AppState, DEFAULT_TAB_WIDTH, DEFAULT_TREE_WIDTH};
