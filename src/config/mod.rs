// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Site configuration.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. [stationary] section of the config file
//! 3. STATIONARY_* env vars
//! 4. --set KEY=VALUE
//! ```
//!
//! # Config File Discovery
//!
//! ```text
//! -c <path>  -->  ./Stationary  -->  ./stationary      first existing wins
//! ```
//!
//! # File Format
//!
//! ```ini
//! [stationary]
//! src_directory = site/
//! build_directory = public/
//! build_data_directory = public-data/
//! layout = blog
//!
//! [context]
//! site_name = My Site
//! founded = 2012-05-01
//! ```
//!
//! INI unless the file name ends in `.toml`. Option names are matched
//! case-insensitively; unknown names become [`ConfigWarning`]s. `[context]`
//! values are typed with [`convert`](crate::utility::convert::convert) and
//! seed the global template context.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ConfigError;
use crate::site::context::Context;

pub use loader::{ConfigLoader, LoadedConfig};
pub use types::{ConfigWarning, ServerConfig, TemplateLanguage, ToolsConfig};

/// Environment variable prefix for option overrides.
pub const ENV_PREFIX: &str = "STATIONARY";

/// Section holding the recognized options.
pub const SECTION: &str = "stationary";

/// Section holding global context values.
pub const CONTEXT_SECTION: &str = "context";

/// Config file names tried after an explicit `-c` path.
pub const CONFIG_CANDIDATES: [&str; 2] = ["Stationary", "stationary"];

/// Complete site configuration.
///
/// Built once by [`ConfigLoader::build`] and shared read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    /// Global context file name inside `data_directory`.
    pub base_context_filename: String,
    /// Output tree.
    pub build_directory: PathBuf,
    /// Tree receiving the resolved context of every page; `None` disables it.
    pub build_data_directory: Option<PathBuf>,
    /// Page data tree, mirroring the source tree.
    pub data_directory: PathBuf,
    /// Directory containing one sub-directory per layout.
    pub layout_directory: PathBuf,
    /// Active layout name.
    pub layout: String,
    /// Source tree.
    pub src_directory: PathBuf,
    pub template_language: TemplateLanguage,
    /// Extension (without dot) of files rendered as templates.
    pub template_extension: String,
    /// Extension (without dot) of data context files.
    pub data_extension: String,
    pub tools: ToolsConfig,
    pub server: ServerConfig,
    /// Values from the `[context]` section.
    pub context: Context,
    /// Values from `--define`, applied above the global data file.
    pub defines: Context,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::with_root(Path::new(""))
    }
}

impl SiteConfig {
    /// Default configuration with every directory placed under `root`.
    ///
    /// With an empty `root` the directories are relative; [`ConfigLoader`]
    /// makes them absolute.
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            base_context_filename: "_global.json".to_string(),
            build_directory: root.join("build"),
            build_data_directory: None,
            data_directory: root.join("data"),
            layout_directory: root.join("layout"),
            layout: "default".to_string(),
            src_directory: root.join("src"),
            template_language: TemplateLanguage::default(),
            template_extension: "html".to_string(),
            data_extension: "json".to_string(),
            tools: ToolsConfig::default(),
            server: ServerConfig::default(),
            context: Context::new(),
            defines: Context::new(),
        }
    }

    /// Directory of the active layout.
    #[must_use]
    pub fn layout_path(&self) -> PathBuf {
        self.layout_directory.join(&self.layout)
    }

    /// Path of the global context file.
    #[must_use]
    pub fn base_context_path(&self) -> PathBuf {
        self.data_directory.join(&self.base_context_filename)
    }

    /// Whether `path` carries the template extension (case-insensitive).
    #[must_use]
    pub fn is_template(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.template_extension))
    }

    /// Apply one recognized option.
    ///
    /// Returns `Ok(false)` when `key` is not a known option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value does not fit the
    /// option.
    pub fn apply_option(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        let value = value.trim();
        match key {
            "base_context_filename" => self.base_context_filename = value.to_string(),
            "build_directory" => self.build_directory = absolute(key, value)?,
            "build_data_directory" => {
                self.build_data_directory = if value.is_empty() {
                    None
                } else {
                    Some(absolute(key, value)?)
                };
            }
            "data_directory" => self.data_directory = absolute(key, value)?,
            "layout_directory" => self.layout_directory = absolute(key, value)?,
            "layout" => self.layout = value.to_string(),
            "src_directory" => self.src_directory = absolute(key, value)?,
            "template_language" => self.template_language = value.parse()?,
            "template_extension" => self.template_extension = extension(key, value)?,
            "data_extension" => self.data_extension = extension(key, value)?,
            "coffee_command" => self.tools.coffee = command(key, value)?,
            "iced_command" => self.tools.iced = command(key, value)?,
            "lessc_command" => self.tools.lessc = command(key, value)?,
            "develop_host" => self.server.host = command(key, value)?,
            "develop_port" => {
                self.server.port = value.parse().map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("'{value}' is not a port number: {e}"),
                })?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Make every directory absolute against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the working directory cannot
    /// be determined.
    pub fn make_absolute(&mut self) -> Result<(), ConfigError> {
        for (key, dir) in [
            ("build_directory", &mut self.build_directory),
            ("data_directory", &mut self.data_directory),
            ("layout_directory", &mut self.layout_directory),
            ("src_directory", &mut self.src_directory),
        ] {
            *dir = absolute_path(key, dir)?;
        }
        if let Some(dir) = self.build_data_directory.as_mut() {
            *dir = absolute_path("build_data_directory", dir)?;
        }
        Ok(())
    }
}

/// Find the configuration file to load.
///
/// Candidates, in order: `explicit`, then [`CONFIG_CANDIDATES`] inside `dir`.
#[must_use]
pub fn find_config(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(CONFIG_CANDIDATES.iter().map(|name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

fn absolute(key: &str, value: &str) -> Result<PathBuf, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "directory must not be empty".to_string(),
        });
    }
    absolute_path(key, Path::new(value))
}

fn absolute_path(key: &str, path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot make '{}' absolute: {e}", path.display()),
    })
}

fn extension(key: &str, value: &str) -> Result<String, ConfigError> {
    let ext = value.trim_start_matches('.').to_ascii_lowercase();
    if ext.is_empty() || ext.contains(['/', '\\']) {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{value}' is not a file extension"),
        });
    }
    Ok(ext)
}

fn command(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(value.to_string())
}
