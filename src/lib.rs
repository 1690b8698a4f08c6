//! codepad - A small source editor for the terminal
//!
//! A directory tree, a syntax-highlighting editor, and File and Git menus
//! that open, save, commit, push and pull without leaving the editor.

pub mod app;
pub mod core;
pub mod editor;
pub mod error;
pub mod git;
pub mod handler;
pub mod logging;
pub mod render;
pub mod tree;
