// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Registries --> Invocation
//!   help [task] | tasks in priority order
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use tracing::{debug, error, warn};

use stationary::cli::global::GlobalOptions;
use stationary::cli::{self, Invocation};
use stationary::config::{ConfigLoader, ENV_PREFIX, SiteConfig, find_config};
use stationary::error::Result;
use stationary::logging::init_logging;
use stationary::task::{Registries, TaskContext};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let _log_guard = match init_logging(&cli.global.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &cli::Cli) -> Result<()> {
    let config = Arc::new(load_config(&cli.global)?);
    let registries = Arc::new(Registries::standard(&config));

    match cli.invocation() {
        Invocation::Help(Some(name)) => {
            match registries.tasks().describe(name) {
                Some(text) => print!("{text}"),
                None => error!("can't get help on {name}, it doesn't exist!"),
            }
            Ok(())
        }
        Invocation::Help(None) => {
            print!("{}", registries.tasks().listing());
            Ok(())
        }
        Invocation::Run(names) => {
            TaskContext::new(config, registries)
                .run_tasks(names)
                .await
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let cwd = std::env::current_dir().context("failed to determine the working directory")?;

    let mut loader = ConfigLoader::new();
    match find_config(global.config.as_deref(), &cwd) {
        Some(path) => {
            debug!(path = %path.display(), "using config file");
            loader = loader.add_file(path);
        }
        None => warn!("config file not found, using defaults"),
    }
    if let Some(explicit) = &global.config
        && !explicit.is_file()
    {
        warn!("config file {} not found", explicit.display());
    }

    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in &global.options {
        loader = loader.set(key, value.as_str())?;
    }
    for (key, raw) in &global.defines {
        loader = loader.define(key, raw);
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<SiteConfig> {
    let loaded = build_config_loader(global)?.build()?;
    debug!(files = ?loaded.files(), "configuration loaded");
    let (config, warnings) = loaded.into_parts();
    for warning in &warnings {
        warn!("{warning}");
    }
    Ok(config)
}
