// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::{relative_slash_path, reroot};
use crate::error::PathError;

#[test]
fn test_reroot_nested_file() {
    let dest = reroot(
        Path::new("/site/src/blog/2023/post.html"),
        Path::new("/site/src"),
        Path::new("/site/build"),
    )
    .unwrap();
    assert_eq!(dest, PathBuf::from("/site/build/blog/2023/post.html"));
}

#[test]
fn test_reroot_join_property() {
    let src_root = Path::new("/projects/site/src");
    let dest_root = Path::new("/tmp/out");
    for relative in ["index.html", "css/site.css", "a/b/c/d.txt", ".hidden"] {
        let dest = reroot(&src_root.join(relative), src_root, dest_root).unwrap();
        assert_eq!(dest, dest_root.join(relative), "relative path {relative}");
    }
}

#[test]
fn test_reroot_relative_roots() {
    let dest = reroot(
        Path::new("src/js/app.js"),
        Path::new("src/"),
        Path::new("build"),
    )
    .unwrap();
    assert_eq!(dest, PathBuf::from("build/js/app.js"));
}

#[test]
fn test_reroot_trailing_separator_insignificant() {
    let with = reroot(Path::new("/src/a.txt"), Path::new("/src/"), Path::new("/build/")).unwrap();
    let without = reroot(Path::new("/src/a.txt"), Path::new("/src"), Path::new("/build")).unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_reroot_root_itself() {
    let dest = reroot(Path::new("/src"), Path::new("/src"), Path::new("/build")).unwrap();
    assert_eq!(dest, PathBuf::from("/build"));
}

#[test]
fn test_reroot_outside_tree() {
    let err = reroot(
        Path::new("/other/file.txt"),
        Path::new("/src"),
        Path::new("/build"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        PathError::NotContained {
            path: "/other/file.txt".to_string(),
            root: "/src".to_string(),
        }
    );
}

#[test]
fn test_reroot_is_segment_wise() {
    // "/srcx" starts with the string "/src" but not with the segment.
    assert!(reroot(Path::new("/srcx/a.txt"), Path::new("/src"), Path::new("/b")).is_err());
    // A path shorter than the root is not contained in it.
    assert!(reroot(Path::new("/src"), Path::new("/src/deeper"), Path::new("/b")).is_err());
}

#[test]
fn test_relative_slash_path() {
    let name = relative_slash_path(Path::new("/site/src/blog/post.html"), Path::new("/site/src"))
        .unwrap();
    insta::assert_snapshot!(name, @"blog/post.html");
    assert!(relative_slash_path(Path::new("/elsewhere/x.html"), Path::new("/site/src")).is_err());
}
