// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options shared by every invocation.
//!
//! # Option Precedence
//!
//! ```text
//! -c FILE           config file, before ./Stationary and ./stationary
//! -d                console log level debug instead of info
//! --log-file FILE   also log to FILE
//! -s KEY=VALUE      option override, above the config file
//! -D KEY=VALUE      global context value, above the global data file
//! ```

use std::path::PathBuf;

use clap::Args;

use crate::logging::{LogConfig, LogLevel};

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to config file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn on debug output.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'build_directory=public'.
    /// Can be specified multiple times.
    #[arg(
        short = 's',
        long = "set",
        value_name = "OPTION",
        value_parser = parse_assignment,
        action = clap::ArgAction::Append
    )]
    pub options: Vec<(String, String)>,

    /// Defines a global context value, such as 'year=2024'.
    /// Can be specified multiple times.
    #[arg(
        short = 'D',
        long = "define",
        value_name = "VALUE",
        value_parser = parse_assignment,
        action = clap::ArgAction::Append
    )]
    pub defines: Vec<(String, String)>,
}

impl GlobalOptions {
    /// Logging setup for these options.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(LogLevel::for_debug(self.debug))
            .maybe_with_log_file(self.log_file.clone())
            .build()
    }
}

/// Split `KEY=VALUE`. The key must not be empty; the value may be.
///
/// # Errors
///
/// Returns a message for clap when there is no `=` or the key is empty.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        Some(_) => Err(format!("missing key in '{s}'")),
        None => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
