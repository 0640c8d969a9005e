// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules.
//!
//! ```text
//!    core
//!     |
//!     v
//!  process
//!     |
//!  Builder (which cache)
//!  Output  (exit code, bytes)
//! ```

pub mod process;
