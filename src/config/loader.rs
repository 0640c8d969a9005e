// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_file(req)           INI, or TOML for *.toml
//!   .add_file_optional(opt)
//!   .add_str(text, format)
//!   .with_env_prefix()       STATIONARY_<OPTION>
//!   .set(key, value)         --set
//!   .define(key, raw)        --define
//!        |
//!        v
//!   config::Config
//!        |
//!        v
//!   [stationary] table  -->  root-level keys  -->  SiteConfig
//!   [context] table     -->  convert()        -->  SiteConfig::context
//!   defines             -->  convert()        -->  SiteConfig::defines
//!        |
//!        v
//!    build() --> LoadedConfig { config, warnings, files }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{File, FileFormat, ValueKind};

use super::{CONTEXT_SECTION, ConfigWarning, SECTION, SiteConfig};
use crate::error::{ConfigError, Result};
use crate::site::context::Context;
use crate::utility::convert::convert;

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<PathBuf>,
    defines: Vec<(String, String)>,
}

/// Result of [`ConfigLoader::build`].
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    config: SiteConfig,
    warnings: Vec<ConfigWarning>,
    files: Vec<PathBuf>,
}

impl LoadedConfig {
    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Problems that did not stop loading, such as unknown options.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Files that were read.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Split into the configuration and its warnings.
    #[must_use]
    pub fn into_parts(self) -> (SiteConfig, Vec<ConfigWarning>) {
        (self.config, self.warnings)
    }
}

/// INI unless the name ends in `.toml`.
fn format_for(path: &Path) -> FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
        _ => FileFormat::Ini,
    }
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
            defines: Vec::new(),
        }
    }

    /// Adds a configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't
    /// exist or cannot be parsed, `build()` will return an error.
    #[must_use]
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(format_for(p)).required(true));
        self.files.push(p.to_path_buf());
        self
    }

    /// Adds configuration text in `format`, layered like a file.
    #[must_use]
    pub fn add_str(mut self, content: &str, format: FileFormat) -> Self {
        self.builder = self.builder.add_source(File::from_str(content, format));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets an option override, above every file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid configuration path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key.to_lowercase(), value)
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(self)
    }

    /// Adds a global context value, typed like `[context]` entries.
    #[must_use]
    pub fn define(mut self, key: &str, raw: &str) -> Self {
        self.defines.push((key.to_string(), raw.to_string()));
        self
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing (`ConfigError::NotFound`).
    /// - A configuration file cannot be parsed (`ConfigError::ParseError`).
    /// - An option has an invalid value (`ConfigError::InvalidValue`).
    pub fn build(self) -> Result<LoadedConfig> {
        if let Some(missing) = self.files.iter().find(|p| !p.is_file()) {
            return Err(ConfigError::NotFound(missing.display().to_string()).into());
        }

        let builder = match &self.env_prefix {
            Some(prefix) => self
                .builder
                .add_source(config::Environment::with_prefix(prefix).prefix_separator("_")),
            None => self.builder,
        };

        let sources = self
            .files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: sources.clone(),
            message: e.to_string(),
        };

        let root: BTreeMap<String, config::Value> = builder
            .build()
            .map_err(parse_error)?
            .try_deserialize()
            .map_err(parse_error)?;

        let mut warnings = Vec::new();
        let mut site = SiteConfig::default();

        // Section first, then root-level keys (environment, overrides) on top.
        let mut options = BTreeMap::new();
        let mut context = Context::new();
        let mut top_level = BTreeMap::new();
        for (key, value) in root {
            let key = key.to_lowercase();
            match value.kind {
                ValueKind::Table(table) if key == SECTION => {
                    options.extend(table.into_iter().map(|(k, v)| (k.to_lowercase(), v)));
                }
                ValueKind::Table(table) if key == CONTEXT_SECTION => {
                    for (name, value) in table {
                        context.insert(name, context_value(value));
                    }
                }
                ValueKind::Table(_) => {}
                kind => {
                    top_level.insert(key, config::Value::new(None, kind));
                }
            }
        }
        options.extend(top_level);

        for (key, value) in options {
            let raw = match value.into_string() {
                Ok(raw) => raw,
                Err(e) => {
                    warnings.push(ConfigWarning {
                        key,
                        message: format!("ignored: {e}"),
                    });
                    continue;
                }
            };
            if !site.apply_option(&key, &raw)? {
                warnings.push(ConfigWarning {
                    message: format!("don't know about option {key} in {SECTION} section of config"),
                    key,
                });
            }
        }

        site.make_absolute()?;
        site.context = context;
        for (key, raw) in self.defines {
            site.defines.insert(key, convert(&raw).into());
        }

        Ok(LoadedConfig {
            config: site,
            warnings,
            files: self.files,
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Strings go through the type converter; values that are already typed
/// (TOML) keep their type.
fn context_value(value: config::Value) -> serde_json::Value {
    match value.kind {
        ValueKind::String(raw) => convert(&raw).into(),
        kind => config::Value::new(None, kind)
            .try_deserialize()
            .unwrap_or(serde_json::Value::Null),
    }
}
