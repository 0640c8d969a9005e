// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `build` task.
//!
//! ```text
//! sanity_check
//!   |
//!   v
//! TeraRenderer::load (layout + source templates)
//!   |
//!   v
//! for file in src/** (sorted)
//!     dispatch(file, reroot(file, src, build))
//!     template?  --> build_data/<path>.json   page context as used
//!   |
//!   v
//! build_data/_global.json                      global context
//! ```
//!
//! Render and tool failures are logged per file; the build carries on and
//! fails at the end with [`TaskError::FilesFailed`]. Anything else aborts.


use std::path::Path;

use futures_util::future::BoxFuture;
use tracing::{error, info};

use super::sanity::sanity_check;
use crate::config::SiteConfig;
use crate::error::{BuildError, Result, TaskError};
use crate::site::builders::{BuildEnv, BuilderRegistry};
use crate::site::context::{Context, ContextResolver};
use crate::site::render::TeraRenderer;
use crate::task::{TaskAction, TaskContext};
use crate::utility::fs::copy::write_file_async;
use crate::utility::fs::walk::walk_tree;
use crate::utility::path::reroot;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildTask;

impl TaskAction for BuildTask {
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let report = build_site(ctx.config(), ctx.builders()).await?;
            if report.failed > 0 {
                return Err(TaskError::FilesFailed {
                    count: report.failed,
                }
                .into());
            }
            Ok(())
        })
    }
}

/// Outcome of a whole-tree build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Files written to the build directory.
    pub built: usize,
    /// Files skipped after a render or tool failure.
    pub failed: usize,
}

/// Build every file under the source directory.
///
/// # Errors
///
/// Fails on a sanity check failure, an unwalkable template directory, or any
/// non-recoverable error while building a file. Recoverable failures are
/// counted in the report instead.
pub async fn build_site(config: &SiteConfig, builders: &BuilderRegistry) -> Result<BuildReport> {
    sanity_check(config)?;

    let renderer = TeraRenderer::load(config)?;
    let env = BuildEnv::new(config, &renderer);
    let resolver = ContextResolver::new(config);
    let sources = walk_tree(&config.src_directory)?;

    let mut report = BuildReport::default();
    for src in sources.files() {
        let dest = reroot(src, &config.src_directory, &config.build_directory)?;

        match builders.dispatch(&env, src, &dest).await {
            Ok(_) => report.built += 1,
            Err(e) if e.downcast_ref::<BuildError>().is_some_and(BuildError::is_recoverable) => {
                error!(src = %src.display(), "{e:#}");
                report.failed += 1;
            }
            Err(e) => return Err(e),
        }

        if let Some(data_root) = &config.build_data_directory
            && config.is_template(src)
        {
            let data_dest = reroot(src, &config.src_directory, data_root)?
                .with_extension(&config.data_extension);
            let context = resolver.page_context(src).await?;
            write_context(&data_dest, &context).await?;
        }
    }

    if let Some(data_root) = &config.build_data_directory {
        let global_dest = reroot(
            &config.base_context_path(),
            &config.data_directory,
            data_root,
        )?;
        write_context(&global_dest, &resolver.global_context().await).await?;
    }

    info!(
        built = report.built,
        failed = report.failed,
        "build finished"
    );
    Ok(report)
}

async fn write_context(dest: &Path, context: &Context) -> Result<()> {
    let mut json = serde_json::to_vec_pretty(context)?;
    json.push(b'\n');
    write_file_async(dest, json).await
}
