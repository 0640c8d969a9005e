// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::task::tasks::HelpTask;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn resolved(registry: &TaskRegistry, list: &[&str]) -> Vec<String> {
    registry
        .resolve(&names(list))
        .unwrap()
        .into_iter()
        .map(|task| task.name().to_string())
        .collect()
}

#[test]
fn test_standard_tasks() {
    let registry = TaskRegistry::standard();
    let priorities: Vec<_> = registry
        .all_tasks()
        .map(|name| (name, registry.get(name).unwrap().priority()))
        .collect();

    insta::assert_debug_snapshot!(priorities, @r#"
    [
        (
            "build",
            1,
        ),
        (
            "clean",
            1,
        ),
        (
            "develop",
            1,
        ),
        (
            "help",
            -1,
        ),
        (
            "sanity_check",
            0,
        ),
    ]
    "#);
}

#[test]
fn test_listing() {
    let registry = TaskRegistry::standard();

    assert_eq!(
        registry.listing(),
        "Available tasks\n---\n  build\n  clean\n  develop\n  help\n  sanity_check\n\n"
    );
}

#[test]
fn test_describe() {
    let registry = TaskRegistry::standard();

    assert_eq!(
        registry.describe("build").unwrap(),
        "build\n---\nRebuilds the site.\n"
    );
    assert!(registry.describe("deploy").is_none());
}

#[test]
fn test_resolve_sorts_by_priority() {
    let registry = TaskRegistry::standard();

    assert_eq!(
        resolved(&registry, &["build", "sanity_check"]),
        ["sanity_check", "build"]
    );
}

#[test]
fn test_resolve_keeps_order_of_ties() {
    let registry = TaskRegistry::standard();

    assert_eq!(
        resolved(&registry, &["clean", "build"]),
        ["clean", "build"]
    );
    assert_eq!(
        resolved(&registry, &["build", "clean"]),
        ["build", "clean"]
    );
}

#[test]
fn test_resolve_dedupes_and_skips_unknown() {
    let registry = TaskRegistry::standard();

    assert_eq!(
        resolved(&registry, &["build", "nope", "sanity_check", "build"]),
        ["sanity_check", "build"]
    );
    assert!(resolved(&registry, &["nope"]).is_empty());
}

#[test]
fn test_resolve_empty_selects_help() {
    let registry = TaskRegistry::standard();
    assert_eq!(resolved(&registry, &[]), ["help"]);

    let err = TaskRegistry::new().resolve(&[]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"task 'help' not found");
}

#[test]
fn test_register_replaces() {
    let mut registry = TaskRegistry::standard();
    registry.register(Task::new("build", 5, "Something else.", HelpTask));

    let build = registry.get("build").unwrap();
    assert_eq!(build.priority(), 5);
    assert_eq!(build.help(), "Something else.");
    assert_eq!(registry.all_tasks().count(), 5);
}
