// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `sanity_check` task.
//!
//! | Directory | Access | Created | On failure |
//! |-----------|--------|---------|------------|
//! | build | write | yes | fatal |
//! | build data (if set) | write | yes | fatal |
//! | source | read | no | fatal |
//! | data | read | no | warning |


use std::path::Path;

use futures_util::future::BoxFuture;
use tracing::{error, warn};

use crate::config::SiteConfig;
use crate::error::{FsError, Result};
use crate::task::{TaskAction, TaskContext};
use crate::utility::fs::{DirAccess, check_dir};

#[derive(Debug, Clone, Copy, Default)]
pub struct SanityCheckTask;

impl TaskAction for SanityCheckTask {
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move { sanity_check(ctx.config()) })
    }
}

/// Verify the directories a build needs.
///
/// # Errors
///
/// Returns [`FsError::DirectoryAccess`] for the first output directory that
/// cannot be created or written, or a source directory that cannot be read.
/// An unreadable data directory is only logged.
pub fn sanity_check(config: &SiteConfig) -> Result<()> {
    require(
        "build",
        &config.build_directory,
        DirAccess::WRITE,
        true,
        "is not writable! Aborting.",
    )?;

    if let Some(build_data) = &config.build_data_directory {
        require(
            "build data",
            build_data,
            DirAccess::WRITE,
            true,
            "is not writable! Aborting.",
        )?;
    }

    require(
        "source",
        &config.src_directory,
        DirAccess::READ,
        false,
        "is not readable or doesn't exist! Aborting",
    )?;

    if !check_dir(&config.data_directory, DirAccess::READ, false) {
        warn!(
            "data directory ({}) is not readable or doesn't exist! This might make things funky",
            config.data_directory.display()
        );
    }

    Ok(())
}

fn require(role: &str, dir: &Path, access: DirAccess, make: bool, complaint: &str) -> Result<()> {
    if check_dir(dir, access, make) {
        return Ok(());
    }
    error!("{role} directory ({}) {complaint}", dir.display());
    Err(FsError::DirectoryAccess {
        role: role.to_string(),
        path: dir.display().to_string(),
        access: access.to_string(),
    }
    .into())
}
