// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! path
//!   reroot()    <src_root>/a/b.html --> <dest_root>/a/b.html
//! convert
//!   convert()   "42" | "3.14" | "2023-01-05" | "true" | "none" --> Value
//! fs
//!   walk:   walk_tree() (sequential, sorted)
//!   access: check_dir(), DirAccess
//!   copy:   copy_file_async(), write_file_async()
//! ```

pub mod convert;
pub mod fs;
pub mod path;
