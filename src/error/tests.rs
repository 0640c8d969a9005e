// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BuildError, PathError, SiteError, SiteResult, bail_out};

#[test]
fn test_path_error_display() {
    let err = PathError::NotContained {
        path: "/other/file.txt".to_string(),
        root: "/src".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"'/other/file.txt' is not contained in '/src'");
}

#[test]
fn test_bail_out_display() {
    let err = bail_out("build directory (/tmp/build) is not writable! Aborting.");
    insta::assert_snapshot!(
        err.to_string(),
        @"fatal error: build directory (/tmp/build) is not writable! Aborting."
    );
}

#[test]
fn test_build_error_recoverable() {
    let recoverable = [
        BuildError::Render {
            template: "index.html".to_string(),
            message: "boom".to_string(),
        }
        .is_recoverable(),
        BuildError::Tool {
            tool: "coffee".to_string(),
            path: "app.coffee".to_string(),
            message: "exit 1".to_string(),
        }
        .is_recoverable(),
        BuildError::SourceNotFound {
            path: "missing.html".to_string(),
        }
        .is_recoverable(),
    ];
    assert_eq!(recoverable, [true, true, false]);
}

#[test]
fn test_site_error_size() {
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<SiteError>();
    assert!(size <= 24, "SiteError is {size} bytes, expected <= 24");
}

#[test]
fn test_site_result_size() {
    let size = std::mem::size_of::<SiteResult<()>>();
    assert!(size <= 24, "SiteResult<()> is {size} bytes, expected <= 24");
}
