// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Result of a walk operation.
///
/// Both lists are in traversal order: parents before children, siblings
/// sorted by file name.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
}

impl WalkResult {
    /// Returns the files found during traversal.
    ///
    /// Anything that is not a directory counts as a file, including
    /// symlinks that are not followed.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the directories found during traversal, excluding the root.
    #[must_use]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }
}

/// Every entry, hidden ones included. Ignore files are not consulted and
/// symlinks are not followed.
fn build_walker(root: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder
}

/// Walks `root` sequentially and collects every file and directory below it.
///
/// # Errors
///
/// Returns an error if the root directory does not exist. Errors on
/// individual entries are logged and skipped.
///
/// # Example
/// ```no_run
/// use stationary::utility::fs::walk::walk_tree;
///
/// let result = walk_tree("site/src")?;
/// println!("Found {} files", result.files().len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn walk_tree<P: AsRef<Path>>(root: P) -> Result<WalkResult> {
    let root = root.as_ref();

    if !root.is_dir() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let mut files = Vec::new();
    let mut directories = Vec::new();

    for entry in build_walker(root).build() {
        match entry {
            Ok(entry) if entry.depth() == 0 => {}
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    directories.push(entry.into_path());
                } else {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!(error = %e, "walk error");
            }
        }
    }

    Ok(WalkResult { files, directories })
}
