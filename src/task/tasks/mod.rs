// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in task implementations.
//!
//! ```text
//! HelpTask          print the task listing
//! SanityCheckTask   directories exist with the right access
//! BuildTask         sanity check, then every source file
//! CleanTask         empty the build directory
//! DevelopTask       on-demand build server until Ctrl+C
//! ```

pub mod build;
pub mod clean;
pub mod develop;
pub mod help;
pub mod sanity;

pub use build::{BuildReport, BuildTask, build_site};
pub use clean::{CleanTask, clean_site};
pub use develop::DevelopTask;
pub use help::HelpTask;
pub use sanity::{SanityCheckTask, sanity_check};
