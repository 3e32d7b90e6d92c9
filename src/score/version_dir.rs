//! Read-only view of a research version directory.
//!
//! A version directory is one iteration of a research pipeline's
//! code/output/docs tree. The scorer never writes to it; every lookup is a
//! fresh filesystem snapshot.

use std::path::{Path, PathBuf};

/// One research iteration's directory tree.
#[derive(Debug, Clone)]
pub struct VersionDir {
    root: PathBuf,
}

impl VersionDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path relative to the version root.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    /// All files with the given extension anywhere under the root, sorted.
    pub fn files_with_extension(&self, ext: &str) -> Vec<PathBuf> {
        Self::files_under(&self.root, ext)
    }

    /// All files with the given extension under a subtree, sorted.
    /// Returns an empty list if the subtree does not exist.
    pub fn files_under(base: &Path, ext: &str) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(base)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|e| e == ext))
            .collect();
        files.sort();
        files
    }

    /// Read file text, returning an empty string on any failure.
    /// Non-UTF-8 bytes are replaced rather than treated as an error.
    pub fn read_text(path: &Path) -> String {
        match std::fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        }
    }

    /// Concatenated text of the given files, one per line group.
    pub fn concat_text(files: &[PathBuf]) -> String {
        files
            .iter()
            .map(|f| Self::read_text(f))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
