// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning for external tools (`coffee`, `iced`, `lessc`).
//!
//! ```text
//! ProcessBuilder::which("lessc")?
//!   .arg(path) .capture_output()
//!   .run()
//!       --> tokio::process::Command
//!           read stdout/stderr to end
//!       --> ProcessOutput { exit_code, stdout (bytes), stderr }
//! ```

pub mod builder;
mod io;
mod runner;

pub use builder::{ProcessBuilder, ProcessOutput, StreamFlags};
