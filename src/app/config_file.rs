//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/codepad/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{DEFAULT_TAB_WIDTH, DEFAULT_TREE_WIDTH};
use crate::editor::SyntaxMode;
use crate::error::{CodepadError, Result};
use crate::git::DEFAULT_REMOTE;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Layout settings
    pub ui: UiConfig,
    /// Editor settings
    pub editor: EditorConfig,
    /// Version-control settings
    pub git: GitConfig,
}

/// UI layout settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tree pane width in columns
    pub tree_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tree_width: DEFAULT_TREE_WIDTH,
        }
    }
}

/// Editor settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Display width of a tab character
    pub tab_width: usize,
    /// Highlighting mode of the initial empty buffer:
    /// "java", "xml", "html", "javascript" or "plain"
    pub default_syntax: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            default_syntax: "java".to_string(),
        }
    }
}

/// Version-control settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote used by push, pull and connect
    pub remote_name: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote_name: DEFAULT_REMOTE.to_string(),
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/codepad)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("codepad"))
    }

    /// Get the config file path (~/.config/codepad/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile =
            toml::from_str(&content).map_err(|e| CodepadError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.editor.tab_width == 0 {
            return Err(CodepadError::config("editor.tab_width must be at least 1"));
        }
        if SyntaxMode::from_name(&self.editor.default_syntax).is_none() {
            return Err(CodepadError::config(format!(
                "unknown editor.default_syntax '{}'",
                self.editor.default_syntax
            )));
        }
        if self.git.remote_name.trim().is_empty() {
            return Err(CodepadError::config("git.remote_name must not be empty"));
        }
        Ok(())
    }

    /// Highlighting mode for the initial buffer
    pub fn default_syntax(&self) -> SyntaxMode {
        SyntaxMode::from_name(&self.editor.default_syntax).unwrap_or(SyntaxMode::Java)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.ui.tree_width, 30);
        assert_eq!(config.editor.tab_width, 4);
        assert_eq!(config.default_syntax(), SyntaxMode::Java);
        assert_eq!(config.git.remote_name, "origin");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[editor]
tab_width = 8
"#;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert_eq!(config.editor.tab_width, 8);
        assert_eq!(config.editor.default_syntax, "java"); // default
        assert_eq!(config.ui.tree_width, 30);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[ui]
tree_width = 40

[editor]
default_syntax = "plain"

[git]
remote_name = "upstream"
"#
        )
        .unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert_eq!(config.ui.tree_width, 40);
        assert_eq!(config.default_syntax(), SyntaxMode::Plain);
        assert_eq!(config.git.remote_name, "upstream");
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        let result = ConfigFile::load_from(file.path());
        assert!(matches!(result, Err(CodepadError::Config(_))));
    }

    #[test]
    fn test_invalid_values_return_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[editor]\ntab_width = 0").unwrap();
        assert!(ConfigFile::load_from(file.path()).is_err());

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[editor]\ndefault_syntax = \"cobol\"").unwrap();
        assert!(ConfigFile::load_from(file.path()).is_err());
    }
}
