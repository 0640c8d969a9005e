// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;

/// Copies `src` to `dst` byte for byte, replacing any existing file.
///
/// # Example
/// ```no_run
/// use stationary::utility::fs::copy::copy_file_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_file_async(Path::new("src/logo.png"), Path::new("build/logo.png")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if the source cannot be read or the destination written.
pub async fn copy_file_async(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .await
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    Ok(())
}

/// Writes `contents` to `dst`, creating missing parent directories.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file written.
pub async fn write_file_async(dst: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(dst, contents)
        .await
        .with_context(|| format!("failed to write {}", dst.display()))?;
    Ok(())
}

/// Removes every file and directory below `root`, keeping `root` itself.
///
/// Files go first, then directories deepest first, so each directory is
/// empty by the time it is removed. Returns the number of entries removed.
///
/// # Errors
///
/// Returns an error on the first entry that cannot be removed.
pub async fn clear_dir_async(root: &Path) -> Result<usize> {
    let result = super::walk::walk_tree(root)?;

    for file in result.files() {
        fs::remove_file(file)
            .await
            .with_context(|| format!("failed to remove {}", file.display()))?;
    }

    let mut directories = result.directories().to_vec();
    directories.sort_by_key(|dir| std::cmp::Reverse(dir.components().count()));
    for dir in &directories {
        fs::remove_dir(dir)
            .await
            .with_context(|| format!("failed to remove directory {}", dir.display()))?;
    }

    Ok(result.files().len() + directories.len())
}
