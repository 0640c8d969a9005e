// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path mapping between the source tree and its mirrors.
//!
//! ```text
//! reroot("/site/src/blog/post.html", "/site/src", "/site/build")
//!            \_______/ \___________/
//!             src_root   relative      -->  /site/build/blog/post.html
//! ```
//!
//! Comparison is segment-wise (`Path::strip_prefix`), so `/site/srcx/a` is
//! not under `/site/src`, and trailing separators on either root are
//! insignificant. `..` segments are not normalized.

use std::path::{Path, PathBuf};

use crate::error::PathError;

/// Re-root `path` from `src_root` onto `dest_root`.
///
/// # Errors
///
/// Returns [`PathError::NotContained`] when `path` does not start with every
/// segment of `src_root`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use stationary::utility::path::reroot;
///
/// let dest = reroot(Path::new("/src/a/b.html"), Path::new("/src"), Path::new("/build"))?;
/// assert_eq!(dest, Path::new("/build/a/b.html"));
/// # Ok::<(), stationary::error::PathError>(())
/// ```
pub fn reroot(path: &Path, src_root: &Path, dest_root: &Path) -> Result<PathBuf, PathError> {
    let relative = path
        .strip_prefix(src_root)
        .map_err(|_| PathError::NotContained {
            path: path.display().to_string(),
            root: src_root.display().to_string(),
        })?;

    if relative.as_os_str().is_empty() {
        Ok(dest_root.to_path_buf())
    } else {
        Ok(dest_root.join(relative))
    }
}

/// Path of `path` relative to `root`, with `/` separators.
///
/// Used for logical template names, which are the same on every platform.
///
/// # Errors
///
/// Returns [`PathError::NotContained`] when `path` is not under `root`.
pub fn relative_slash_path(path: &Path, root: &Path) -> Result<String, PathError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| PathError::NotContained {
            path: path.display().to_string(),
            root: root.display().to_string(),
        })?;

    let segments: Vec<_> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect();
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests;
