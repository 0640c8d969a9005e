// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! SiteConfig: directories, layout, TemplateLanguage, ToolsConfig, ServerConfig
//! ConfigWarning: unknown option, collected instead of failing
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Template engine used for page rendering.
///
/// Only Tera is built in. `jinja2` is accepted as an alias since Tera reads
/// the same syntax for everything a simple site needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateLanguage {
    #[default]
    Tera,
}

impl fmt::Display for TemplateLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tera => write!(f, "tera"),
        }
    }
}

impl std::str::FromStr for TemplateLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tera" | "jinja2" | "jinja" => Ok(Self::Tera),
            _ => Err(ConfigError::InvalidValue {
                key: "template_language".to_string(),
                message: format!("expected 'tera' or 'jinja2', got '{s}'"),
            }),
        }
    }
}

/// External compilers, by command name or path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// `CoffeeScript` compiler, run as `<coffee> --print <file>`.
    pub coffee: String,
    /// `IcedCoffeeScript` compiler, run as `<iced> --runtime inline --print <file>`.
    pub iced: String,
    /// Less compiler, run as `<lessc> <file>`.
    pub lessc: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            coffee: "coffee".to_string(),
            iced: "iced".to_string(),
            lessc: "lessc".to_string(),
        }
    }
}

/// Development server binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1432,
        }
    }
}

impl ServerConfig {
    /// `host:port` as used for binding and in log messages.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A configuration problem that does not stop the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    pub key: String,
    pub message: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}
