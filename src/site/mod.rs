// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The build pipeline.
//!
//! ```text
//!   src/blog/post.html
//!          |
//!          v
//!   BuilderRegistry::dispatch  (key: ".html")
//!          |
//!          +--> ContextResolver  global <- data/blog/post.json(.coffee|.iced)
//!          |
//!          +--> Renderer         "blog/post.html" + context
//!          v
//!   build/blog/post.html
//! ```

pub mod builders;
pub mod context;
pub mod render;

use std::path::Path;

use crate::core::process::ProcessBuilder;
use crate::error::Result;

/// Run an external tool on `file` and return what it printed.
///
/// `command` is looked up in `PATH` unless it contains a separator.
pub(crate) async fn tool_output(command: &str, args: &[&str], file: &Path) -> Result<Vec<u8>> {
    let output = ProcessBuilder::which(command)?
        .name(command)
        .args(args)
        .arg(file)
        .capture_output()
        .run()
        .await?;
    Ok(output.into_stdout())
}
