// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "warn,stationary=info",
        "warn,stationary=debug",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(LogLevel::from_u8(6).is_none());
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"invalid value for 'log_level': log level must be 0-5, got 9");
}

#[test]
fn test_debug_switch() {
    assert_eq!(LogLevel::for_debug(true), LogLevel::DEBUG);
    assert_eq!(LogLevel::for_debug(false), LogLevel::INFO);
    assert!(LogLevel::DEBUG > LogLevel::INFO);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
