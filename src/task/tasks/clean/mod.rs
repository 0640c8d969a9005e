// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `clean` task: remove everything below the build directory, keep the
//! directory itself.


use futures_util::future::BoxFuture;
use tracing::{error, info};

use crate::config::SiteConfig;
use crate::error::{FsError, Result};
use crate::task::{TaskAction, TaskContext};
use crate::utility::fs::copy::clear_dir_async;
use crate::utility::fs::{DirAccess, check_dir};

#[derive(Debug, Clone, Copy, Default)]
pub struct CleanTask;

impl TaskAction for CleanTask {
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            clean_site(ctx.config()).await?;
            Ok(())
        })
    }
}

/// Empty the build directory. Returns the number of entries removed.
///
/// # Errors
///
/// Returns [`FsError::DirectoryAccess`] before touching anything if the
/// build directory is missing or not readable and writable.
pub async fn clean_site(config: &SiteConfig) -> Result<usize> {
    let build = &config.build_directory;
    let access = DirAccess::READ | DirAccess::WRITE;
    if !check_dir(build, access, false) {
        error!("build directory ({}) is not {access}! Aborting.", build.display());
        return Err(FsError::DirectoryAccess {
            role: "build".to_string(),
            path: build.display().to_string(),
            access: access.to_string(),
        }
        .into());
    }

    info!("cleaning up {}/", build.display());
    let removed = clear_dir_async(build).await?;
    info!(removed, "build directory cleaned");
    Ok(removed)
}
