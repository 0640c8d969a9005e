// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task registry: lookup, ordering and execution.
//!
//! ```text
//! input ["build", "nope", "sanity_check", "build"]
//!   unknown  "nope"   --> warning, skipped
//!   dedupe            --> [build, sanity_check]
//!   stable sort       --> [sanity_check (0), build (1)]
//!   empty input       --> [help]
//! ```

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use anyhow::Context;
use tracing::{info, warn};

use super::tasks::{BuildTask, CleanTask, DevelopTask, HelpTask, SanityCheckTask};
use super::{Task, TaskContext};
use crate::error::{Result, TaskError, bail_out};

/// Name of the task run when none is given.
pub const DEFAULT_TASK: &str = "help";

/// Registry of tasks by name.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, Task>,
}

impl TaskRegistry {
    /// Creates an empty `TaskRegistry`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
        }
    }

    /// Registry with `help`, `sanity_check`, `build`, `clean` and `develop`.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Task::new(
            "help",
            -1,
            "Prints a helpful help message.",
            HelpTask,
        ));
        registry.register(Task::new(
            "sanity_check",
            0,
            "Checks that the build directories are writable and the source directory is readable.",
            SanityCheckTask,
        ));
        registry.register(Task::new("build", 1, "Rebuilds the site.", BuildTask));
        registry.register(Task::new(
            "clean",
            1,
            "Deletes the contents of the build directory.",
            CleanTask,
        ));
        registry.register(Task::new(
            "develop",
            1,
            "Starts a webserver that rerenders and serves dynamically generated pages.",
            DevelopTask,
        ));
        registry
    }

    /// Registers a task, replacing any task of the same name.
    pub fn register(&mut self, task: Task) {
        self.tasks.insert(task.name().to_string(), task);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// Returns all registered task names, sorted.
    pub fn all_tasks(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Tasks to run for `names`, in execution order.
    ///
    /// Unknown names are warned about and skipped. Each task appears once.
    /// Ties in priority keep the order of `names`. No names selects
    /// [`DEFAULT_TASK`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no names are given and the default
    /// task is not registered.
    pub fn resolve(&self, names: &[String]) -> std::result::Result<Vec<&Task>, TaskError> {
        if names.is_empty() {
            return self
                .get(DEFAULT_TASK)
                .map(|task| vec![task])
                .ok_or_else(|| TaskError::NotFound(DEFAULT_TASK.to_string()));
        }

        let mut seen = BTreeSet::new();
        let mut selected = Vec::new();
        for name in names {
            match self.get(name) {
                Some(task) if seen.insert(task.name()) => selected.push(task),
                Some(_) => {}
                None => warn!(task = %name, "no such task, skipping"),
            }
        }

        selected.sort_by_key(|task| task.priority());
        Ok(selected)
    }

    /// Runs the tasks selected by `names`, one after another.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failing task, or a fatal error if
    /// cancellation was requested between tasks.
    pub async fn run(&self, names: &[String], ctx: &TaskContext) -> Result<()> {
        let selected = self.resolve(names)?;

        for task in selected {
            if ctx.is_cancelled() {
                return Err(bail_out(format!("interrupted before task '{}'", task.name())).into());
            }

            info!(task = task.name(), priority = task.priority(), "running task");
            task.run(ctx)
                .await
                .with_context(|| format!("task '{}' failed", task.name()))?;
        }

        Ok(())
    }

    /// Listing printed by `help` without arguments.
    #[must_use]
    pub fn listing(&self) -> String {
        let mut out = String::from("Available tasks\n---\n");
        for name in self.all_tasks() {
            let _ = writeln!(out, "  {name}");
        }
        out.push('\n');
        out
    }

    /// Text printed by `help <name>`, if the task exists.
    #[must_use]
    pub fn describe(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|task| format!("{}\n---\n{}\n", task.name(), task.help()))
    }
}
