// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Template context resolution.
//!
//! # Sources
//!
//! ```text
//! low  [context] section of the config file
//!  |   data/_global.json                       (base_context_filename)
//!  |   --define KEY=VALUE
//! high data/<page path>.json                   (per page)
//! ```
//!
//! # Data File Candidates
//!
//! ```text
//! src/blog/post.html  --reroot-->  data/blog/post.json
//!
//!   data/blog/post.json           read as JSON
//!   data/blog/post.json.coffee    `coffee <file>`, stdout read as JSON
//!   data/blog/post.json.iced      `iced <file>`,   stdout read as JSON
//! ```
//!
//! The first candidate that exists decides. If it cannot be read or parsed
//! the page gets an empty context and later candidates are not tried.
//! Missing data is never an error.


use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{SiteConfig, ToolsConfig};
use crate::error::{ContextError, PathError, Result};
use crate::utility::path::reroot;

/// Variables available to a template.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// Merge `page` over `global`.
///
/// Keys of `page` replace keys of the same name; nothing is merged deeper
/// than the top level.
#[must_use]
pub fn merge(global: &Context, page: Context) -> Context {
    let mut merged = global.clone();
    merged.extend(page);
    merged
}

/// Script language that can produce a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocessor {
    Coffee,
    Iced,
}

impl Preprocessor {
    /// Candidates after the literal data file, in order.
    pub const ALL: [Self; 2] = [Self::Coffee, Self::Iced];

    /// Extension appended to the data file name.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Iced => "iced",
        }
    }

    /// Configured interpreter command.
    #[must_use]
    pub fn command(self, tools: &ToolsConfig) -> &str {
        match self {
            Self::Coffee => &tools.coffee,
            Self::Iced => &tools.iced,
        }
    }

    /// `data.json` -> `data.json.<ext>`
    #[must_use]
    pub fn source_for(self, data_file: &Path) -> PathBuf {
        let mut name = OsString::from(data_file.as_os_str());
        name.push(".");
        name.push(self.extension());
        PathBuf::from(name)
    }
}

/// Resolves global and per-page contexts for one configuration.
#[derive(Debug, Clone, Copy)]
pub struct ContextResolver<'a> {
    config: &'a SiteConfig,
}

impl<'a> ContextResolver<'a> {
    #[must_use]
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Data file for a source file, before any preprocessor extension.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotContained`] if `src_file` is outside the
    /// source directory.
    pub fn data_path(&self, src_file: &Path) -> std::result::Result<PathBuf, PathError> {
        let data_file = reroot(
            src_file,
            &self.config.src_directory,
            &self.config.data_directory,
        )?;
        Ok(data_file.with_extension(&self.config.data_extension))
    }

    /// Context shared by every page.
    pub async fn global_context(&self) -> Context {
        let mut context = self.config.context.clone();
        context.extend(self.read_context(&self.config.base_context_path()).await);
        context.extend(self.config.defines.clone());
        context
    }

    /// Context from the page's own data file only.
    ///
    /// # Errors
    ///
    /// Fails only when `src_file` is outside the source directory.
    pub async fn file_context(&self, src_file: &Path) -> Result<Context> {
        let data_file = self.data_path(src_file)?;
        Ok(self.read_context(&data_file).await)
    }

    /// Context a page is rendered with.
    ///
    /// # Errors
    ///
    /// Fails only when `src_file` is outside the source directory.
    pub async fn page_context(&self, src_file: &Path) -> Result<Context> {
        let global = self.global_context().await;
        let page = self.file_context(src_file).await?;
        Ok(merge(&global, page))
    }

    /// Read a data file, trying preprocessor sources after the literal one.
    ///
    /// Never fails: problems are logged and give an empty context.
    pub async fn read_context(&self, data_file: &Path) -> Context {
        let candidates = std::iter::once((data_file.to_path_buf(), None)).chain(
            Preprocessor::ALL
                .into_iter()
                .map(|pre| (pre.source_for(data_file), Some(pre))),
        );

        for (candidate, preprocessor) in candidates {
            if !candidate.exists() {
                continue;
            }
            return match self.load(&candidate, preprocessor).await {
                Ok(context) => {
                    debug!(path = %candidate.display(), keys = context.len(), "loaded data context");
                    context
                }
                Err(e) => {
                    warn!("{e}");
                    Context::new()
                }
            };
        }

        debug!(path = %data_file.display(), "data context does not exist");
        Context::new()
    }

    async fn load(
        &self,
        path: &Path,
        preprocessor: Option<Preprocessor>,
    ) -> std::result::Result<Context, ContextError> {
        let shown = path.display().to_string();
        let bytes = match preprocessor {
            None => tokio::fs::read(path)
                .await
                .map_err(|source| ContextError::Read {
                    path: shown.clone(),
                    source,
                })?,
            Some(pre) => {
                let command = pre.command(&self.config.tools);
                debug!(path = %shown, command, "preprocessing data context");
                super::tool_output(command, &[], path)
                    .await
                    .map_err(|e| ContextError::Preprocessor {
                        path: shown.clone(),
                        message: format!("{e:#}"),
                    })?
            }
        };

        parse_context(&shown, &bytes)
    }
}

/// Parse JSON text that must hold an object.
///
/// # Errors
///
/// Returns [`ContextError::Parse`] for invalid JSON and
/// [`ContextError::NotAnObject`] for any other top-level value.
pub fn parse_context(path: &str, bytes: &[u8]) -> std::result::Result<Context, ContextError> {
    match serde_json::from_slice(bytes) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(ContextError::NotAnObject {
            path: path.to_string(),
        }),
        Err(source) => Err(ContextError::Parse {
            path: path.to_string(),
            source,
        }),
    }
}
