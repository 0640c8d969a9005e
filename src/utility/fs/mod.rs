// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:    walk_tree()          ignore::Walk (sequential, sorted by name,
//!                               hidden included, links not followed)
//! access:  check_dir()          create if asked, try read / write
//!          DirAccess            READ | WRITE
//! copy:    copy_file_async()    tokio::fs byte copy
//!          write_file_async()   write, creating parents
//!          clear_dir_async()    files, then directories deepest first
//! ```

pub mod access;
pub mod copy;
pub mod walk;

pub use access::{DirAccess, check_dir};
