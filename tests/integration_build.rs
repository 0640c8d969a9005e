// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end builds of small sites.
//!
//! Each test lays out a site in a temp dir, writes a `Stationary` INI file
//! and drives the pipeline through the loader and the task registry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use stationary::config::{ConfigLoader, SiteConfig};
use stationary::task::{Registries, TaskContext};

struct Site {
    temp: tempfile::TempDir,
}

impl Site {
    fn new() -> Self {
        let site = Self {
            temp: tempfile::tempdir().unwrap(),
        };
        for dir in ["src", "data", "layout/default"] {
            std::fs::create_dir_all(site.path(dir)).unwrap();
        }
        site
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Config file pointing every directory into the temp dir.
    fn config(&self, extra: &str) -> SiteConfig {
        let root = self.temp.path().display();
        let ini = format!(
            "[stationary]\n\
             src_directory = {root}/src\n\
             build_directory = {root}/build\n\
             data_directory = {root}/data\n\
             layout_directory = {root}/layout\n\
             {extra}"
        );
        let file = self.path("Stationary");
        std::fs::write(&file, ini).unwrap();

        let loaded = ConfigLoader::new().add_file(&file).build().unwrap();
        assert!(loaded.warnings().is_empty(), "{:?}", loaded.warnings());
        loaded.into_parts().0
    }

    #[cfg(unix)]
    fn fake_tool(&self, name: &str, script: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(name);
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }
}

async fn run(config: SiteConfig, tasks: &[&str]) -> stationary::error::Result<()> {
    let config = Arc::new(config);
    let registries = Arc::new(Registries::standard(&config));
    let names: Vec<String> = tasks.iter().map(ToString::to_string).collect();
    TaskContext::new(config, registries).run_tasks(&names).await
}

fn tree(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walk(root)
        .into_iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(walk(&path));
        } else {
            out.push(path);
        }
    }
    out
}

#[tokio::test]
async fn build_site_with_layout_and_contexts() {
    let site = Site::new();
    site.write(
        "layout/default/base.html",
        "<title>{{ site_name }}</title>{% block body %}{% endblock body %}",
    );
    site.write(
        "src/index.html",
        "{% extends \"base.html\" %}{% block body %}<h1>{{ title }}</h1>{% endblock body %}",
    );
    site.write(
        "src/about/me.html",
        "{% extends \"base.html\" %}{% block body %}{{ bio | markdown }}{% endblock body %}",
    );
    site.write("src/img/logo.svg", "<svg/>");
    site.write("data/_global.json", r#"{"title": "Home", "site_name": "file"}"#);
    site.write("data/about/me.json", r#"{"bio": "*hello*"}"#);
    let config = site.config("\n[context]\nsite_name = Demo\n");

    run(config, &["build"]).await.unwrap();

    assert_eq!(tree(&site.path("build")), ["about/me.html", "img/logo.svg", "index.html"]);
    assert_eq!(site.read("build/index.html"), "<title>file</title><h1>Home</h1>");
    assert_eq!(
        site.read("build/about/me.html"),
        "<title>file</title><p><em>hello</em></p>\n"
    );
    assert_eq!(site.read("build/img/logo.svg"), "<svg/>");
}

#[tokio::test]
async fn build_data_tree_records_contexts() {
    let site = Site::new();
    site.write("src/index.html", "{{ title }}");
    site.write("data/_global.json", r#"{"title": "Home"}"#);
    let data = site.path("out-data");
    let config = site.config(&format!(
        "build_data_directory = {}\n\n[context]\nyear = 2024\n",
        data.display()
    ));

    run(config, &["build"]).await.unwrap();

    assert_eq!(tree(&data), ["_global.json", "index.json"]);
    let global: serde_json::Value =
        serde_json::from_str(&site.read("out-data/_global.json")).unwrap();
    assert_eq!(global, serde_json::json!({"title": "Home", "year": 2024}));
}

#[tokio::test]
async fn rebuild_is_byte_identical() {
    let site = Site::new();
    site.write("src/index.html", "{{ title }}!");
    site.write("src/notes.txt", "plain text");
    site.write("data/_global.json", r#"{"title": "Home"}"#);
    let config = site.config("");

    run(config.clone(), &["build"]).await.unwrap();
    let first = (site.read("build/index.html"), site.read("build/notes.txt"));
    run(config, &["build"]).await.unwrap();
    let second = (site.read("build/index.html"), site.read("build/notes.txt"));

    assert_eq!(first.0, "Home!");
    assert_eq!(first, second);
}

#[tokio::test]
async fn clean_then_build_follows_command_line_order() {
    let site = Site::new();
    site.write("src/index.html", "x");
    site.write("build/stale/old.html", "old");
    let config = site.config("");

    run(config.clone(), &["clean", "build"]).await.unwrap();
    assert_eq!(tree(&site.path("build")), ["index.html"]);

    run(config, &["build", "clean"]).await.unwrap();
    assert!(tree(&site.path("build")).is_empty());
    assert!(site.path("build").is_dir());
}

#[tokio::test]
async fn failed_pages_fail_the_build_after_the_rest_is_written() {
    let site = Site::new();
    site.write("src/bad.html", "{{ missing_value }}");
    site.write("src/good.html", "ok");
    let config = site.config("");

    let err = run(config, &["build"]).await.unwrap_err();

    assert_eq!(format!("{err:#}"), "task 'build' failed: 1 file(s) failed to build");
    assert_eq!(tree(&site.path("build")), ["good.html"]);
}

#[tokio::test]
async fn broken_template_only_fails_its_own_page() {
    let site = Site::new();
    site.write("layout/default/base.html", "<main>{% block body %}{% endblock body %}</main>");
    site.write(
        "src/index.html",
        "{% extends \"base.html\" %}{% block body %}home{% endblock body %}",
    );
    site.write("src/blog/broken.html", "{% if x %}unclosed");
    site.write("src/robots.txt", "User-agent: *");
    let config = site.config("");

    let err = run(config, &["build"]).await.unwrap_err();

    assert_eq!(format!("{err:#}"), "task 'build' failed: 1 file(s) failed to build");
    assert_eq!(tree(&site.path("build")), ["index.html", "robots.txt"]);
    assert_eq!(site.read("build/index.html"), "<main>home</main>");
}

#[tokio::test]
async fn unreadable_source_aborts_before_writing() {
    let site = Site::new();
    std::fs::remove_dir(site.path("src")).unwrap();
    let config = site.config("");

    let err = run(config, &["build"]).await.unwrap_err();

    assert!(format!("{err:#}").contains("source directory"), "{err:#}");
    assert!(tree(&site.path("build")).is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn compiled_assets_and_preprocessed_data() {
    let site = Site::new();
    let coffee = site.fake_tool("fake-coffee", r#"for last; do :; done; cat "$last""#);
    let lessc = site.fake_tool("fake-lessc", r#"echo "/* $(basename "$1") */""#);
    site.write("src/app.coffee", "console.log('hi');");
    site.write("src/style.less", "@c: red;");
    site.write("src/index.html", "{{ generated }}");
    site.write("data/index.json.coffee", r#"{"generated": "by coffee"}"#);
    let config = site.config(&format!(
        "coffee_command = {coffee}\nlessc_command = {lessc}\n"
    ));

    run(config, &["build"]).await.unwrap();

    assert_eq!(tree(&site.path("build")), ["app.js", "index.html", "style.css"]);
    assert_eq!(site.read("build/app.js"), "console.log('hi');");
    assert_eq!(site.read("build/style.css"), "/* style.less */\n");
    assert_eq!(site.read("build/index.html"), "by coffee");
}
