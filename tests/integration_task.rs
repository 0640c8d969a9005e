// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the task system.
//!
//! Runs the built-in tasks through `TaskContext` against temp directories.
//! Ordering and registry unit tests are in `src/task/registry/tests.rs`.

use std::sync::Arc;

use stationary::config::SiteConfig;
use stationary::task::{Registries, TaskContext};
use tokio_util::sync::CancellationToken;

fn context(config: SiteConfig) -> TaskContext {
    let config = Arc::new(config);
    let registries = Arc::new(Registries::standard(&config));
    TaskContext::new(config, registries)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn sanity_check_creates_output_directories() {
    let temp = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::with_root(temp.path());
    config.build_data_directory = Some(temp.path().join("build-data"));
    std::fs::create_dir_all(&config.src_directory).unwrap();

    context(config.clone())
        .run_tasks(&names(&["sanity_check"]))
        .await
        .unwrap();

    assert!(config.build_directory.is_dir());
    assert!(temp.path().join("build-data").is_dir());
}

#[tokio::test]
async fn help_and_unknown_tasks_succeed() {
    let ctx = context(SiteConfig::default());

    ctx.run_tasks(&[]).await.unwrap();
    ctx.run_tasks(&names(&["no_such_task"])).await.unwrap();
}

#[tokio::test]
async fn clean_missing_build_directory_fails() {
    let temp = tempfile::tempdir().unwrap();
    let config = SiteConfig::with_root(temp.path());

    let err = context(config)
        .run_tasks(&names(&["clean"]))
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.starts_with("task 'clean' failed: "), "{message}");
    assert!(message.contains("build directory"), "{message}");
}

#[tokio::test]
async fn cancelled_context_runs_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let config = SiteConfig::with_root(temp.path());
    std::fs::create_dir_all(&config.src_directory).unwrap();
    let token = CancellationToken::new();
    token.cancel();

    let err = context(config.clone())
        .with_cancel_token(token)
        .run_tasks(&names(&["build"]))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("interrupted"));
    assert!(!config.build_directory.exists());
}
