//! Whole-file text I/O for the editor buffer

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Whether `path` is a regular file, following symbolic links
pub fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Read an entire file as UTF-8 text.
///
/// Only regular files are read; a FIFO or device would block the caller.
pub fn read_text(path: &Path) -> Result<String> {
    if !std::fs::metadata(path)?.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("not a regular file: {}", path.display()),
        )
        .into());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Overwrite `path` with `text`.
///
/// There is no temp-file-and-rename step: a failure midway can leave a
/// partially written file.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text.as_bytes())?;
    Ok(())
}

/// Resolve a user-typed path.
///
/// `~/` expands to the home directory; relative paths resolve against `root`.
/// Returns None for blank input.
pub fn resolve_input_path(input: &str, root: &Path) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let expanded = match input.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(input)),
        None => PathBuf::from(input),
    };

    if expanded.is_absolute() {
        Some(expanded)
    } else {
        Some(root.join(expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_is_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("round.txt");
        let text = "line one\r\nline two\n\ttabbed ünïcode\n\n";

        write_text(&path, text).unwrap();
        assert_eq!(read_text(&path).unwrap(), text);
        assert_eq!(std::fs::read(&path).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("f.txt");
        std::fs::write(&path, "a much longer original content").unwrap();

        write_text(&path, "short").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(read_text(&temp.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_read_non_utf8_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin.dat");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x81]).unwrap();
        assert!(read_text(&path).is_err());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        assert!(write_text(&temp.path().join("no/such/dir.txt"), "x").is_err());
    }

    #[test]
    fn test_read_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(!is_regular_file(temp.path()));
        assert!(read_text(temp.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_fifo_fails_without_blocking() {
        let temp = TempDir::new().unwrap();
        let pipe = temp.path().join("pipe");
        let made = std::process::Command::new("mkfifo")
            .arg(&pipe)
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        if !made {
            return;
        }

        assert!(!is_regular_file(&pipe));
        assert!(read_text(&pipe).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_regular_file_through_symlink() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a.txt");
        std::fs::write(&target, "a").unwrap();
        let link = temp.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(is_regular_file(&link));
        assert_eq!(read_text(&link).unwrap(), "a");
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_input_path() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_input_path("src/a.java", root),
            Some(PathBuf::from("/project/src/a.java"))
        );
        assert_eq!(
            resolve_input_path("  /abs/b.txt  ", root),
            Some(PathBuf::from("/abs/b.txt"))
        );
        assert_eq!(resolve_input_path("   ", root), None);
    }
}
