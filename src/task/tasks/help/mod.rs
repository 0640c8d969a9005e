// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `help` task.
//!
//! `help <name>` is answered by the command line front end before any task
//! runs; this task only prints the listing.

use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::task::{TaskAction, TaskContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct HelpTask;

impl TaskAction for HelpTask {
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            print!("{}", ctx.registries().tasks().listing());
            Ok(())
        })
    }
}
