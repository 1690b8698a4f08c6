//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use super::config_file::ConfigFile;
use super::exit_code;
use crate::editor::SyntaxMode;

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Project directory; None means ask at startup
    pub root: Option<PathBuf>,
    /// File to open once the UI is up (PATH named a file)
    pub open_file: Option<PathBuf>,
    /// Tree pane width (from config file)
    pub tree_width: u16,
    /// Tab display width (from config file)
    pub tab_width: usize,
    /// Mode of the initial empty buffer (from config file)
    pub default_syntax: SyntaxMode,
    /// Remote name for push/pull/connect (from config file)
    pub remote_name: String,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();
        Self::parse(env::args().skip(1), config_file)
    }

    /// Parse arguments (without the program name) on top of a config file
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        config_file: ConfigFile,
    ) -> anyhow::Result<Self> {
        let mut root: Option<PathBuf> = None;
        let mut open_file: Option<PathBuf> = None;

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("cpad {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                path if !path.starts_with('-') => {
                    if root.is_some() {
                        anyhow::bail!("Unexpected argument: {}", path);
                    }
                    let p = PathBuf::from(path);
                    if p.is_dir() {
                        root = Some(p.canonicalize()?);
                    } else if p.is_file() {
                        let file = p.canonicalize()?;
                        root = file.parent().map(|d| d.to_path_buf());
                        open_file = Some(file);
                    } else {
                        anyhow::bail!("Path does not exist: {}", path);
                    }
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        Ok(Self {
            root,
            open_file,
            tree_width: config_file.ui.tree_width,
            tab_width: config_file.editor.tab_width,
            default_syntax: config_file.default_syntax(),
            remote_name: config_file.git.remote_name,
        })
    }
}

fn print_help() {
    println!(
        r#"cpad - codepad: a small source editor with Git built in

USAGE:
    cpad [OPTIONS] [PATH]

    PATH is the project directory. A file path opens that file with its
    directory as the project. Without PATH, cpad asks for a directory.

OPTIONS:
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/codepad/config.toml

    [ui]
    tree_width = 30
    [editor]
    tab_width = 4
    default_syntax = "java"     # java, xml, html, javascript, plain
    [git]
    remote_name = "origin"

ENVIRONMENT:
    CODEPAD_LOG         Log filter (default: codepad=info)

KEYBINDINGS:
    F10                 Open the menu bar
    Alt+F / Alt+G       Open the File / Git menu
    Ctrl+O              Open file
    Ctrl+S              Save file
    Ctrl+Q              Exit
    Tab                 Tree: move focus to the editor
    Esc                 Editor: move focus to the tree

  Tree
    j/k, ↓/↑            Move
    g/G                 Go to top / bottom
    l/→                 Expand directory / open file
    h/←                 Collapse directory
    Enter               Open file / toggle directory
    q                   Quit

EXIT CODES:
    0           Success
    2           Error (runtime error)
    3           Invalid arguments (unknown option or missing path)
"#
    );
}
