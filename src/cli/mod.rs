// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line front end using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! stationary [options] [TASK]...
//!
//!   (none)             help
//!   build clean        clean, then build (priority order)
//!   help               task listing, nothing else runs
//!   help build         help for build, nothing else runs
//! ```

pub mod global;


use clap::Parser;

use crate::cli::global::GlobalOptions;

const HELP: &str = "help";

/// Simple static site generator
#[derive(Debug, Parser)]
#[command(
    name = "stationary",
    author,
    version,
    about = "Simple static site generator",
    long_about = "stationary Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Renders the templates of a source tree into a build tree.\n\n\
                  Run `stationary help` to list the tasks and\n\
                  `stationary help <task>` to describe one.",
    after_help = "CONFIG FILES:\n\n\
                  The config file is the one given with -c, otherwise `Stationary`\n\
                  or `stationary` in the current directory. Options go in the\n\
                  [stationary] section, global template values in [context]."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Tasks to run, in priority order.
    #[arg(value_name = "TASK")]
    pub tasks: Vec<String>,
}

/// What the command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation<'a> {
    /// `help`, optionally about one task. Nothing else runs.
    Help(Option<&'a str>),
    /// Run these tasks.
    Run(&'a [String]),
}

impl Cli {
    /// Interpret the task list.
    ///
    /// The first `help` wins; the name after it, if any, is the topic.
    #[must_use]
    pub fn invocation(&self) -> Invocation<'_> {
        match self.tasks.iter().position(|t| t == HELP) {
            Some(i) => Invocation::Help(self.tasks.get(i + 1).map(String::as_str)),
            None => Invocation::Run(&self.tasks),
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
