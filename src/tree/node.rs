//! Tree entry (node) definition

use std::path::{Path, PathBuf};

/// A single entry in the file tree
#[derive(Debug, Clone)]
pub struct TreeEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// Display name
    pub name: String,
    /// Whether this is a directory
    pub is_dir: bool,
    /// Depth in the tree (0 = root)
    pub depth: usize,
    /// Whether directory is expanded (display only)
    pub expanded: bool,
    /// Child entries (directories only)
    children: Vec<TreeEntry>,
}

impl TreeEntry {
    /// Create a leaf entry without touching its children
    pub fn new(path: PathBuf, is_dir: bool, depth: usize) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            path,
            name,
            is_dir,
            depth,
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Build the full subtree rooted at `path`.
    ///
    /// Children keep the order the directory listing returns them in. A
    /// listing that fails yields no children. Symbolic links are followed;
    /// a link back to a directory already being scanned stays childless.
    pub fn scan(path: &Path, depth: usize) -> Self {
        let is_dir = path.is_dir();
        let mut entry = Self::new(path.to_path_buf(), is_dir, depth);
        if is_dir {
            entry.children = scan_children(path, depth + 1, &mut Vec::new());
        }
        entry
    }

    /// Check if this entry is expanded
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Get children (immutable)
    pub fn children(&self) -> &[TreeEntry] {
        &self.children
    }

    /// Get children (mutable)
    pub fn children_mut(&mut self) -> &mut Vec<TreeEntry> {
        &mut self.children
    }

    /// Toggle expanded state
    pub fn toggle_expanded(&mut self) {
        if self.is_dir {
            self.expanded = !self.expanded;
        }
    }

    /// Set expanded state
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.is_dir {
            self.expanded = expanded;
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeEntry::node_count).sum::<usize>()
    }
}

/// `ancestors` holds the canonical paths of the directories currently on
/// the recursion stack.
fn scan_children(dir: &Path, depth: usize, ancestors: &mut Vec<PathBuf>) -> Vec<TreeEntry> {
    let canonical = match dir.canonicalize() {
        Ok(canonical) => canonical,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "canonicalize failed");
            return Vec::new();
        }
    };
    if ancestors.contains(&canonical) {
        tracing::debug!(dir = %dir.display(), "symlink cycle, not descending");
        return Vec::new();
    }

    let listing = match std::fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "directory listing failed");
            return Vec::new();
        }
    };

    ancestors.push(canonical);
    let children = listing
        .filter_map(|e| e.ok())
        .map(|e| {
            let path = e.path();
            // Follows symlinks
            let is_dir = path.is_dir();
            let mut child = TreeEntry::new(path, is_dir, depth);
            if is_dir {
                child.children = scan_children(&child.path, depth + 1, ancestors);
            }
            child
        })
        .collect();
    ancestors.pop();
    children
}
