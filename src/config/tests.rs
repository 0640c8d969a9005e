// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigLoader, SiteConfig, TemplateLanguage, find_config};
use crate::error::ConfigError;
use config::FileFormat;
use serde_json::json;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let loaded = ConfigLoader::new().build().unwrap();
    let config = loaded.config();

    assert!(loaded.warnings().is_empty());
    assert!(config.build_directory.is_absolute());
    assert!(config.build_directory.ends_with("build"));
    assert!(config.src_directory.ends_with("src"));
    assert!(config.data_directory.ends_with("data"));
    assert!(config.layout_directory.ends_with("layout"));
    assert_eq!(config.build_data_directory, None);
    insta::assert_yaml_snapshot!(
        json!({
            "base_context_filename": config.base_context_filename,
            "layout": config.layout,
            "template_language": config.template_language.to_string(),
            "template_extension": config.template_extension,
            "data_extension": config.data_extension,
            "tools": [config.tools.coffee, config.tools.iced, config.tools.lessc],
            "server": config.server.address(),
        }),
        @r#"
    base_context_filename: _global.json
    data_extension: json
    layout: default
    server: "localhost:1432"
    template_extension: html
    template_language: tera
    tools:
      - coffee
      - iced
      - lessc
    "#
    );
}

#[test]
fn test_ini_section_options() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().display();
    let ini = format!(
        "[stationary]\n\
         build_directory = {root}/public\n\
         Build_Data_Directory = {root}/public-data\n\
         layout = blog\n\
         template_language = jinja2\n\
         template_extension = .HTM\n\
         develop_port = 8080\n\
         \n\
         [other]\n\
         ignored = yes\n"
    );

    let loaded = ConfigLoader::new()
        .add_str(&ini, FileFormat::Ini)
        .build()
        .unwrap();
    let config = loaded.config();

    assert!(loaded.warnings().is_empty(), "{:?}", loaded.warnings());
    assert_eq!(config.build_directory, temp.path().join("public"));
    assert_eq!(
        config.build_data_directory,
        Some(temp.path().join("public-data"))
    );
    assert_eq!(config.layout, "blog");
    assert_eq!(config.template_language, TemplateLanguage::Tera);
    assert_eq!(config.template_extension, "htm");
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_unknown_option_is_warning() {
    let loaded = ConfigLoader::new()
        .add_str("[stationary]\nlayuot = typo\nlayout = main\n", FileFormat::Ini)
        .build()
        .unwrap();

    assert_eq!(loaded.config().layout, "main");
    let warnings: Vec<String> = loaded.warnings().iter().map(ToString::to_string).collect();
    insta::assert_debug_snapshot!(warnings, @r#"
    [
        "layuot: don't know about option layuot in stationary section of config",
    ]
    "#);
}

#[test]
fn test_invalid_values_are_fatal() {
    let bad_port = ConfigLoader::new()
        .add_str("[stationary]\ndevelop_port = many\n", FileFormat::Ini)
        .build()
        .unwrap_err();
    assert!(matches!(
        bad_port.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { key, .. }) if key == "develop_port"
    ));

    let bad_language = ConfigLoader::new()
        .add_str("[stationary]\ntemplate_language = mako\n", FileFormat::Ini)
        .build()
        .unwrap_err();
    insta::assert_snapshot!(
        bad_language.to_string(),
        @"invalid value for 'template_language': expected 'tera' or 'jinja2', got 'mako'"
    );
}

#[test]
fn test_context_section_is_typed() {
    let loaded = ConfigLoader::new()
        .add_str(
            "[context]\nsite_name = My Site\nyear = 2012\nlaunched = 2012-05-01\ndraft = False\n",
            FileFormat::Ini,
        )
        .define("year", "2024")
        .define("tagline", "none")
        .build()
        .unwrap();
    let config = loaded.config();

    assert_eq!(
        serde_json::Value::Object(config.context.clone()),
        json!({
            "site_name": "My Site",
            "year": 2012,
            "launched": "2012-05-01",
            "draft": false,
        })
    );
    assert_eq!(
        serde_json::Value::Object(config.defines.clone()),
        json!({ "year": 2024, "tagline": null })
    );
}

#[test]
fn test_toml_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("stationary.toml");
    std::fs::write(
        &path,
        format!(
            "[stationary]\nsrc_directory = \"{}\"\ndevelop_port = 9000\n\n[context]\ncount = 3\ntitle = \"2.5\"\n",
            temp.path().join("pages").display()
        ),
    )
    .unwrap();

    let loaded = ConfigLoader::new().add_file(&path).build().unwrap();
    let config = loaded.config();

    assert_eq!(config.src_directory, temp.path().join("pages"));
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.context.get("count"), Some(&json!(3)));
    // TOML strings still go through the converter
    assert_eq!(config.context.get("title"), Some(&json!(2.5)));
    assert_eq!(loaded.files(), [path]);
}

#[test]
fn test_overrides_beat_section() {
    let loaded = ConfigLoader::new()
        .add_str("[stationary]\nlayout = from_file\n", FileFormat::Ini)
        .set("layout", "from_cli")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(loaded.config().layout, "from_cli");
}

#[test]
fn test_missing_required_file() {
    let err = ConfigLoader::new()
        .add_file("/definitely/not/here/Stationary")
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_files_lists_only_files_on_disk() {
    let temp = tempfile::tempdir().unwrap();
    let first = temp.path().join("Stationary");
    let second = temp.path().join("local.toml");
    std::fs::write(&first, "[stationary]\nlayout = docs\n").unwrap();
    std::fs::write(&second, "[stationary]\nbuild_directory = \"out\"\n").unwrap();

    let loaded = ConfigLoader::new()
        .add_file(&first)
        .add_str("[stationary]\ndevelop_port = 4000\n", FileFormat::Ini)
        .add_file(&second)
        .build()
        .unwrap();

    assert_eq!(loaded.config().layout, "docs");
    assert_eq!(loaded.config().server.port, 4000);
    assert_eq!(loaded.files(), [first, second]);
}

#[test]
fn test_unparsable_file_is_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[stationary\nlayout = ").unwrap();

    let err = ConfigLoader::new().add_file(&path).build().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_find_config_candidates() {
    let temp = tempfile::tempdir().unwrap();
    let explicit = temp.path().join("site.ini");

    assert_eq!(find_config(Some(&explicit), temp.path()), None);

    std::fs::write(temp.path().join("stationary"), "").unwrap();
    assert_eq!(
        find_config(Some(&explicit), temp.path()),
        Some(temp.path().join("stationary"))
    );

    std::fs::write(&explicit, "").unwrap();
    assert_eq!(find_config(Some(&explicit), temp.path()), Some(explicit));
}

#[test]
fn test_site_config_helpers() {
    let config = SiteConfig::with_root(&PathBuf::from("/site"));

    assert_eq!(config.layout_path(), PathBuf::from("/site/layout/default"));
    assert_eq!(
        config.base_context_path(),
        PathBuf::from("/site/data/_global.json")
    );
    assert!(config.is_template(&PathBuf::from("/site/src/index.HTML")));
    assert!(!config.is_template(&PathBuf::from("/site/src/app.js")));
}
