// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::path::Path;

use bitflags::bitflags;
use tracing::debug;

bitflags! {
    /// Access a directory must grant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirAccess: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
    }
}

impl fmt::Display for DirAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Self::READ), self.contains(Self::WRITE)) {
            (true, true) => f.write_str("readable and writable"),
            (true, false) => f.write_str("readable"),
            (false, true) => f.write_str("writable"),
            (false, false) => f.write_str("accessible"),
        }
    }
}

/// Check that `dir` is a directory granting `access`.
///
/// With `make`, a missing directory (and its parents) is created first.
/// Readability is checked by listing the directory, writability by creating
/// and removing a temporary file inside it. Returns `false` on any failure.
#[must_use]
pub fn check_dir(dir: &Path, access: DirAccess, make: bool) -> bool {
    if make
        && !dir.exists()
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        debug!(path = %dir.display(), error = %e, "could not create directory");
        return false;
    }

    if !dir.is_dir() {
        return false;
    }

    if access.contains(DirAccess::READ)
        && let Err(e) = std::fs::read_dir(dir)
    {
        debug!(path = %dir.display(), error = %e, "directory is not readable");
        return false;
    }

    if access.contains(DirAccess::WRITE)
        && let Err(e) = tempfile::tempfile_in(dir)
    {
        debug!(path = %dir.display(), error = %e, "directory is not writable");
        return false;
    }

    true
}
