// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!            cli (clap)       config (INI/TOML, env, --set)
//!                |                     |
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   task  (Registries)      |
//!              | help sanity build clean   |
//!              |        develop --> server |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |          site             |
//!              | builders  context  render |
//!              '-------------+-------------'
//!                            v
//!   +-----------------------------------------+
//!   |  core      process (external tools)     |
//!   +-----------------------------------------+
//!   |  foundation  error, logging, utility    |
//!   |              (reroot, convert, fs)      |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod server;
pub mod site;
pub mod task;
pub mod utility;
