// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builders, keyed by source extension.
//!
//! # Dispatch Table
//!
//! | Source ext | Builder | Output |
//! |------------|---------|--------|
//! | `.html` (template extension) | [`BuilderKind::Template`] | rendered page |
//! | `.js` | [`BuilderKind::Script`] | copy, or compile `.coffee`/`.iced` sibling |
//! | `.css` | [`BuilderKind::Stylesheet`] | copy, or compile `.less` sibling |
//! | `.coffee` | [`BuilderKind::Coffee`] | `.js` |
//! | `.iced` | [`BuilderKind::Iced`] | `.js` |
//! | `.less` | [`BuilderKind::Less`] | `.css` |
//! | anything else | [`BuilderKind::Static`] | byte copy |
//!
//! The key is always the source extension; a builder may write somewhere
//! other than the requested destination and returns the path it wrote.


use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::info;

use crate::config::{SiteConfig, ToolsConfig};
use crate::error::{BuildError, Result};
use crate::site::context::ContextResolver;
use crate::site::render::Renderer;
use crate::utility::fs::copy::{copy_file_async, write_file_async};
use crate::utility::path::relative_slash_path;

/// What to do with a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    /// Byte-for-byte copy.
    Static,
    /// Render through the template engine.
    Template,
    /// `.js`: copy, or compile a `.coffee`/`.iced` sibling.
    Script,
    /// `.css`: copy, or compile a `.less` sibling.
    Stylesheet,
    Coffee,
    Iced,
    Less,
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Static => "static",
            Self::Template => "template",
            Self::Script => "script",
            Self::Stylesheet => "stylesheet",
            Self::Coffee => "coffee",
            Self::Iced => "iced",
            Self::Less => "less",
        })
    }
}

/// External compiler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compiler {
    Coffee,
    Iced,
    Less,
}

impl Compiler {
    const fn target_extension(self) -> &'static str {
        match self {
            Self::Coffee | Self::Iced => "js",
            Self::Less => "css",
        }
    }

    const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Coffee => &["--print"],
            Self::Iced => &["--runtime", "inline", "--print"],
            Self::Less => &[],
        }
    }

    fn command(self, tools: &ToolsConfig) -> &str {
        match self {
            Self::Coffee => &tools.coffee,
            Self::Iced => &tools.iced,
            Self::Less => &tools.lessc,
        }
    }
}

/// Sibling sources tried when a `.js` file does not exist, in order.
const SCRIPT_SOURCES: [(&str, Compiler); 2] = [("coffee", Compiler::Coffee), ("iced", Compiler::Iced)];

/// Sibling sources tried when a `.css` file does not exist.
const STYLESHEET_SOURCES: [(&str, Compiler); 1] = [("less", Compiler::Less)];

/// Everything a builder needs besides the paths.
#[derive(Clone, Copy)]
pub struct BuildEnv<'a> {
    config: &'a SiteConfig,
    renderer: &'a dyn Renderer,
}

impl<'a> BuildEnv<'a> {
    #[must_use]
    pub const fn new(config: &'a SiteConfig, renderer: &'a dyn Renderer) -> Self {
        Self { config, renderer }
    }

    #[must_use]
    pub const fn config(&self) -> &'a SiteConfig {
        self.config
    }
}

/// Extension to builder table with an explicit fallback.
#[derive(Debug, Clone)]
pub struct BuilderRegistry {
    entries: BTreeMap<String, BuilderKind>,
    fallback: BuilderKind,
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderRegistry {
    /// Empty table; everything is copied.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: BuilderKind::Static,
        }
    }

    /// The built-in table for `config`'s template extension.
    #[must_use]
    pub fn standard(config: &SiteConfig) -> Self {
        let mut registry = Self::new();
        registry.register(&config.template_extension, BuilderKind::Template);
        registry.register("js", BuilderKind::Script);
        registry.register("css", BuilderKind::Stylesheet);
        registry.register("coffee", BuilderKind::Coffee);
        registry.register("iced", BuilderKind::Iced);
        registry.register("less", BuilderKind::Less);
        registry
    }

    /// Map an extension (with or without the dot, any case) to a builder.
    ///
    /// Registering an extension again replaces the previous builder.
    pub fn register(&mut self, extension: &str, kind: BuilderKind) {
        self.entries.insert(normalize_extension(extension), kind);
    }

    /// Registered keys (`.ext`) and their builders.
    pub fn entries(&self) -> impl Iterator<Item = (&str, BuilderKind)> {
        self.entries.iter().map(|(ext, kind)| (ext.as_str(), *kind))
    }

    #[must_use]
    pub const fn fallback(&self) -> BuilderKind {
        self.fallback
    }

    /// Builder for a source path.
    #[must_use]
    pub fn builder_for(&self, src: &Path) -> BuilderKind {
        src.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.entries.get(&normalize_extension(ext)))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Build one file.
    ///
    /// Creates the parent directory of `dest`, then runs the builder chosen
    /// by `src`'s extension. Returns the path actually written.
    ///
    /// # Errors
    ///
    /// - [`BuildError::SourceNotFound`] if nothing can produce `dest`.
    /// - [`BuildError::Render`] / [`BuildError::Tool`] for per-file failures.
    /// - I/O and path errors otherwise.
    pub async fn dispatch(&self, env: &BuildEnv<'_>, src: &Path, dest: &Path) -> Result<PathBuf> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        match self.builder_for(src) {
            BuilderKind::Static => build_static(src, dest).await,
            BuilderKind::Template => build_template(env, src, dest).await,
            BuilderKind::Script => build_with_fallback(env, src, dest, &SCRIPT_SOURCES).await,
            BuilderKind::Stylesheet => {
                build_with_fallback(env, src, dest, &STYLESHEET_SOURCES).await
            }
            BuilderKind::Coffee => compile(env, Compiler::Coffee, src, dest).await,
            BuilderKind::Iced => compile(env, Compiler::Iced, src, dest).await,
            BuilderKind::Less => compile(env, Compiler::Less, src, dest).await,
        }
    }
}

/// `"HTML"`, `".html"` -> `".html"`
fn normalize_extension(extension: &str) -> String {
    format!(".{}", extension.trim_start_matches('.').to_ascii_lowercase())
}

fn source_not_found(src: &Path) -> anyhow::Error {
    BuildError::SourceNotFound {
        path: src.display().to_string(),
    }
    .into()
}

async fn build_static(src: &Path, dest: &Path) -> Result<PathBuf> {
    if !src.is_file() {
        return Err(source_not_found(src));
    }
    info!(src = %src.display(), dest = %dest.display(), "copying file");
    copy_file_async(src, dest).await?;
    Ok(dest.to_path_buf())
}

async fn build_template(env: &BuildEnv<'_>, src: &Path, dest: &Path) -> Result<PathBuf> {
    if !src.is_file() {
        return Err(source_not_found(src));
    }
    let name = relative_slash_path(src, &env.config.src_directory)?;
    let context = ContextResolver::new(env.config).page_context(src).await?;

    info!(src = %src.display(), dest = %dest.display(), "rendering file");
    let page = env.renderer.render(&name, &context)?;
    write_file_async(dest, page).await?;
    Ok(dest.to_path_buf())
}

async fn build_with_fallback(
    env: &BuildEnv<'_>,
    src: &Path,
    dest: &Path,
    sources: &[(&str, Compiler)],
) -> Result<PathBuf> {
    if src.is_file() {
        return build_static(src, dest).await;
    }
    for (extension, compiler) in sources {
        let sibling = src.with_extension(extension);
        if sibling.is_file() {
            return compile(env, *compiler, &sibling, dest).await;
        }
    }
    Err(source_not_found(src))
}

async fn compile(
    env: &BuildEnv<'_>,
    compiler: Compiler,
    src: &Path,
    dest: &Path,
) -> Result<PathBuf> {
    if !src.is_file() {
        return Err(source_not_found(src));
    }
    let dest = dest.with_extension(compiler.target_extension());
    let command = compiler.command(&env.config.tools);
    info!(
        src = %src.display(),
        dest = %dest.display(),
        tool = command,
        "building file"
    );

    let output = super::tool_output(command, compiler.args(), src)
        .await
        .map_err(|e| BuildError::Tool {
            tool: command.to_string(),
            path: src.display().to_string(),
            message: format!("{e:#}"),
        })?;
    write_file_async(&dest, output).await?;
    Ok(dest)
}
