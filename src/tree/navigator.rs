//! Tree navigator - handles tree traversal and flattening

use std::path::Path;

use super::TreeEntry;
use crate::error::Result;

/// Manages file tree navigation
pub struct TreeNavigator {
    /// Root entry
    root: TreeEntry,
}

impl TreeNavigator {
    /// Scan the whole tree under `root_path` once.
    ///
    /// The root starts expanded; every subdirectory starts collapsed.
    pub fn new(root_path: &Path) -> Result<Self> {
        if !root_path.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("not a directory: {}", root_path.display()),
            )
            .into());
        }

        let mut root = TreeEntry::scan(root_path, 0);
        root.set_expanded(true);
        tracing::debug!(
            root = %root_path.display(),
            nodes = root.node_count(),
            "scanned project tree"
        );

        Ok(Self { root })
    }

    /// Get root entry
    pub fn root(&self) -> &TreeEntry {
        &self.root
    }

    /// Flatten the tree into a list of visible entries
    pub fn visible_entries(&self) -> Vec<&TreeEntry> {
        let mut entries = Vec::new();
        Self::collect_visible(&self.root, &mut entries);
        entries
    }

    fn collect_visible<'a>(entry: &'a TreeEntry, out: &mut Vec<&'a TreeEntry>) {
        out.push(entry);
        if entry.is_expanded() {
            for child in entry.children() {
                Self::collect_visible(child, out);
            }
        }
    }

    /// Get total count of visible entries
    pub fn visible_count(&self) -> usize {
        self.visible_entries().len()
    }

    /// Toggle expand/collapse for entry at path
    pub fn toggle_expand(&mut self, path: &Path) {
        if let Some(entry) = self.find_entry_mut(path) {
            entry.toggle_expanded();
        }
    }

    /// Expand entry at path
    pub fn expand(&mut self, path: &Path) {
        if let Some(entry) = self.find_entry_mut(path) {
            entry.set_expanded(true);
        }
    }

    /// Collapse entry at path
    pub fn collapse(&mut self, path: &Path) {
        if let Some(entry) = self.find_entry_mut(path) {
            entry.set_expanded(false);
        }
    }

    fn find_entry_mut(&mut self, path: &Path) -> Option<&mut TreeEntry> {
        Self::find_in_entry_mut(&mut self.root, path)
    }

    fn find_in_entry_mut<'a>(entry: &'a mut TreeEntry, path: &Path) -> Option<&'a mut TreeEntry> {
        if entry.path == path {
            return Some(entry);
        }
        if !path.starts_with(&entry.path) {
            return None;
        }
        for child in entry.children_mut() {
            if let Some(found) = Self::find_in_entry_mut(child, path) {
                return Some(found);
            }
        }
        None
    }
}
