// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              SiteError (~24 bytes)
//!                     |
//!   +------+------+---+---+------+------+------+
//!   |      |      |       |      |      |      |
//!   v      v      v       v      v      v      v
//! Bail   Path   Cfg    Context Build  Task  Proc/Fs/Io
//!        Box    Box     Box     Box   Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Path     NotContained
//!   Config   ReadError, ParseError, InvalidValue, NotFound
//!   Context  Read, Parse, NotAnObject, Preprocessor
//!   Build    SourceNotFound, Render, Tool
//!   Task     NotFound, FilesFailed
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs       DirectoryAccess, IoError
//! ```
//!
//! Recoverability:
//!
//! | Error | Handling |
//! |-------|----------|
//! | [`PathError`] | propagates, aborts the current operation |
//! | [`ConfigError`] | missing file warns; unparsable file or bad value is fatal |
//! | [`FsError::DirectoryAccess`] | fatal for `build`/`clean`, before any file is touched |
//! | [`ContextError`] | logged, the resolver yields an empty context |
//! | [`BuildError::Render`] / [`BuildError::Tool`] | logged per file, build continues |

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SiteError`].
pub type SiteResult<T> = std::result::Result<T, SiteError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Path mapping invariant violated.
    #[error("path error: {0}")]
    Path(#[from] Box<PathError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Data context error.
    #[error("context error: {0}")]
    Context(#[from] Box<ContextError>),

    /// Per-file build error.
    #[error("build error: {0}")]
    Build(#[from] Box<BuildError>),

    /// Task execution error.
    #[error("task error: {0}")]
    Task(#[from] Box<TaskError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`SiteError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> SiteError {
    SiteError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SiteError {
                fn from(err: $error) -> Self {
                    SiteError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    PathError => Path,
    ConfigError => Config,
    ContextError => Context,
    BuildError => Build,
    TaskError => Task,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Path Errors ---

/// Path mapping errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path does not live under the root it is being mapped from.
    #[error("'{path}' is not contained in '{root}'")]
    NotContained { path: String, root: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Context Errors ---

/// Errors while loading a data context file.
///
/// None of these abort a build: the resolver logs them and falls back to an
/// empty context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Data file exists but could not be read.
    #[error("data context '{path}' exists, but is not readable: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not valid JSON.
    #[error("data context '{path}' is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Data file parsed, but the top-level value is not an object.
    #[error("data context '{path}' must contain a JSON object")]
    NotAnObject { path: String },

    /// The preprocessor producing the data failed.
    #[error("preprocessing data context '{path}' failed: {message}")]
    Preprocessor { path: String, message: String },
}

// --- Build Errors ---

/// Errors raised by a single builder invocation.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Neither the source file nor a preprocessor sibling exists.
    #[error("source not found: {path}")]
    SourceNotFound { path: String },

    /// The template engine failed to render a page.
    #[error("failed to render template '{template}': {message}")]
    Render { template: String, message: String },

    /// An external compiler failed or could not be started.
    #[error("{tool} failed on '{path}': {message}")]
    Tool {
        tool: String,
        path: String,
        message: String,
    },
}

impl BuildError {
    /// Whether a whole-tree build should log this error and move on.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Render { .. } | Self::Tool { .. })
    }
}

// --- Task Errors ---

/// Task execution errors.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Task was not found.
    #[error("task '{0}' not found")]
    NotFound(String),

    /// Some files could not be built.
    #[error("{count} file(s) failed to build")]
    FilesFailed { count: usize },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// A directory is missing or lacks the required access.
    #[error("{role} directory '{path}' is not {access}")]
    DirectoryAccess {
        role: String,
        path: String,
        access: String,
    },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
