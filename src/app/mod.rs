//! Application module
//!
//! This module contains the main application logic, configuration,
//! and event loop for codepad.

mod config;
mod config_file;
mod event_loop;
mod render;

pub use config::Config;
pub use config_file::{ConfigFile, EditorConfig, GitConfig, UiConfig};
pub use event_loop::{pick_project_dir, run_app, AppResult};

/// Message printed when the startup prompt yields no directory
pub const NO_PROJECT_MESSAGE: &str = "No project directory selected. Exiting.";

/// Process exit codes
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, missing path)
    pub const INVALID: i32 = 3;
}
