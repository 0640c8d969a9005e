// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Named top-level operations.
//!
//! # Architecture
//!
//! ```text
//!   CLI task names ["build", "sanity_check"]
//!          |
//!          v
//!   TaskRegistry::resolve    dedupe, drop unknown, sort by priority
//!          |
//!          v
//!   sanity_check (0) --> build (1)
//!          |
//!          v
//!   TaskAction::run(&TaskContext)
//!                     config, Registries, cancel token
//! ```
//!
//! # Built-in Tasks
//!
//! | Name | Priority | Action |
//! |------|----------|--------|
//! | `help` | -1 | list tasks |
//! | `sanity_check` | 0 | check directories |
//! | `build` | 1 | build the whole source tree |
//! | `clean` | 1 | empty the build directory |
//! | `develop` | 1 | serve pages built on request |
//!
//! # Adding a Task
//!
//! Implement [`TaskAction`] and register a [`Task`] on the registry before
//! wrapping it in [`Registries`].

pub mod registry;
pub mod tasks;


use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::site::builders::BuilderRegistry;

pub use registry::TaskRegistry;

/// The operation behind a task.
///
/// Returns a `BoxFuture` so tasks can be stored as trait objects.
pub trait TaskAction: Send + Sync {
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>>;
}

/// A registered task.
#[derive(Clone)]
pub struct Task {
    name: String,
    help: String,
    priority: i32,
    action: Arc<dyn TaskAction>,
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl Task {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        priority: i32,
        help: impl Into<String>,
        action: impl TaskAction + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            priority,
            action: Arc::new(action),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Lower runs first.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Run the task's action.
    ///
    /// # Errors
    ///
    /// Returns whatever the action returns.
    pub async fn run(&self, ctx: &TaskContext) -> Result<()> {
        self.action.run(ctx).await
    }
}

/// Builders and tasks, constructed once at startup.
#[derive(Debug)]
pub struct Registries {
    builders: BuilderRegistry,
    tasks: TaskRegistry,
}

impl Registries {
    #[must_use]
    pub const fn new(builders: BuilderRegistry, tasks: TaskRegistry) -> Self {
        Self { builders, tasks }
    }

    /// Built-in builders for `config` and the five built-in tasks.
    #[must_use]
    pub fn standard(config: &SiteConfig) -> Self {
        Self::new(BuilderRegistry::standard(config), TaskRegistry::standard())
    }

    #[must_use]
    pub const fn builders(&self) -> &BuilderRegistry {
        &self.builders
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }
}

/// Context handed to every task.
#[derive(Debug, Clone)]
pub struct TaskContext {
    config: Arc<SiteConfig>,
    registries: Arc<Registries>,
    cancel_token: CancellationToken,
}

impl TaskContext {
    #[must_use]
    pub fn new(config: Arc<SiteConfig>, registries: Arc<Registries>) -> Self {
        Self {
            config,
            registries,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Use an externally owned cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<SiteConfig> {
        &self.config
    }

    #[must_use]
    pub const fn registries(&self) -> &Arc<Registries> {
        &self.registries
    }

    #[must_use]
    pub fn builders(&self) -> &BuilderRegistry {
        self.registries.builders()
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Run `names` through this context's task registry.
    ///
    /// # Errors
    ///
    /// Returns the first task failure.
    pub async fn run_tasks(&self, names: &[String]) -> Result<()> {
        self.registries.tasks().run(names, self).await
    }
}
