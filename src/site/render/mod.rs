// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Template rendering.
//!
//! ```text
//! layout/<layout>/**   name relative to the layout   base.html, partials/nav.html
//! src/**/*.<ext>       name relative to src          index.html, blog/post.html
//! ```
//!
//! Both trees are loaded into one Tera instance so pages can extend or
//! include layout templates. A page with the same name as a layout template
//! replaces it. Autoescaping is off.
//!
//! A template that cannot be read, is not UTF-8, does not parse, or extends
//! a template that is missing is recorded as failed. Rendering it returns
//! [`BuildError::Render`]; every other template stays usable.
//!
//! Filters: `markdown` (CommonMark to HTML).


use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use pulldown_cmark::{Parser, html};
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::error::{BuildError, Result};
use crate::site::context::Context;
use crate::utility::fs::walk::walk_tree;
use crate::utility::path::relative_slash_path;

/// Renders a logical template name with a context.
pub trait Renderer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`BuildError::Render`] if the template is unknown or fails.
    fn render(&self, template: &str, context: &Context) -> std::result::Result<String, BuildError>;
}

/// [`Renderer`] backed by Tera.
///
/// Templates that cannot be read or parsed are kept aside with their error
/// and only fail when rendered, so one broken page does not take down the
/// rest of the site.
#[derive(Debug)]
pub struct TeraRenderer {
    tera: tera::Tera,
    failed: BTreeMap<String, String>,
}

impl TeraRenderer {
    /// Load layout and source templates for `config`.
    ///
    /// A missing layout directory is not an error.
    ///
    /// # Errors
    ///
    /// Fails if a template directory cannot be walked.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let mut sources = Vec::new();

        let layout = config.layout_path();
        if layout.is_dir() {
            collect(&layout, &mut sources, |_| true)?;
        } else {
            debug!(path = %layout.display(), "layout directory does not exist");
        }
        if config.src_directory.is_dir() {
            collect(&config.src_directory, &mut sources, |p| {
                config.is_template(p)
            })?;
        }

        Ok(Self::from_sources(sources))
    }

    /// Build from `(name, source)` pairs. Later pairs replace earlier ones.
    #[must_use]
    pub fn from_templates(templates: Vec<(String, String)>) -> Self {
        Self::from_sources(
            templates
                .into_iter()
                .map(|(name, source)| (name, Ok(source)))
                .collect(),
        )
    }

    fn from_sources(sources: Vec<(String, std::result::Result<String, String>)>) -> Self {
        let mut parsed: BTreeMap<String, (tera::Template, String)> = BTreeMap::new();
        let mut failed = BTreeMap::new();

        for (name, source) in sources {
            let template = source.and_then(|source| {
                tera::Template::new(&name, None, &source)
                    .map(|template| (template, source))
                    .map_err(|e| format!("failed to parse '{name}': {}", error_chain(&e)))
            });
            match template {
                Ok(template) => {
                    failed.remove(&name);
                    parsed.insert(name, template);
                }
                Err(message) => {
                    parsed.remove(&name);
                    failed.insert(name, message);
                }
            }
        }

        prune_unresolved(&mut parsed, &mut failed);

        let mut tera = tera::Tera::default();
        tera.autoescape_on(Vec::new());
        tera.register_filter("markdown", markdown_filter);
        if let Err(e) = tera.add_raw_templates(
            parsed
                .iter()
                .map(|(name, (_, source))| (name.as_str(), source.as_str())),
        ) {
            let message = error_chain(&e);
            failed.extend(parsed.into_keys().map(|name| (name, message.clone())));
            tera = tera::Tera::default();
        }

        for (name, message) in &failed {
            warn!(template = %name, "{message}");
        }
        debug!(
            count = tera.get_template_names().count(),
            failed = failed.len(),
            "loaded templates"
        );
        Self { tera, failed }
    }

    /// Registered template names, sorted.
    #[must_use]
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Templates that could not be loaded, with the reason.
    #[must_use]
    pub fn failures(&self) -> &BTreeMap<String, String> {
        &self.failed
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, template: &str, context: &Context) -> std::result::Result<String, BuildError> {
        let render_error = |message: String| BuildError::Render {
            template: template.to_string(),
            message,
        };
        if let Some(message) = self.failed.get(template) {
            return Err(render_error(message.clone()));
        }
        let context =
            tera::Context::from_serialize(context).map_err(|e| render_error(error_chain(&e)))?;
        self.tera
            .render(template, &context)
            .map_err(|e| render_error(error_chain(&e)))
    }
}

/// CommonMark to HTML.
#[must_use]
pub fn markdown_to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, Parser::new(text));
    out
}

fn markdown_filter(
    value: &tera::Value,
    _: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("markdown filter expects a string"))?;
    Ok(tera::Value::String(markdown_to_html(text)))
}

fn collect(
    root: &Path,
    sources: &mut Vec<(String, std::result::Result<String, String>)>,
    wanted: impl Fn(&Path) -> bool,
) -> Result<()> {
    let walked = walk_tree(root)?;
    for path in walked.files().iter().filter(|p| wanted(p)) {
        let name = relative_slash_path(path, root)?;
        let source = std::fs::read(path)
            .map_err(|e| format!("failed to read template {}: {e}", path.display()))
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|e| {
                    format!("template {} is not valid UTF-8: {e}", path.display())
                })
            });
        sources.push((name, source));
    }
    Ok(())
}

/// Drop templates whose parent or macro imports are missing, then any
/// that extend in a circle. Repeats until nothing changes since dropping
/// a parent orphans its children.
fn prune_unresolved(
    parsed: &mut BTreeMap<String, (tera::Template, String)>,
    failed: &mut BTreeMap<String, String>,
) {
    loop {
        let broken: Vec<(String, String)> = {
            let current: &BTreeMap<_, _> = parsed;
            current
                .iter()
                .filter_map(|(name, (template, _))| {
                    unresolved(name, template, current).map(|message| (name.clone(), message))
                })
                .collect()
        };
        if broken.is_empty() {
            return;
        }
        for (name, message) in broken {
            parsed.remove(&name);
            failed.insert(name, message);
        }
    }
}

fn unresolved(
    name: &str,
    template: &tera::Template,
    parsed: &BTreeMap<String, (tera::Template, String)>,
) -> Option<String> {
    if let Some((file, _)) = template
        .imported_macro_files
        .iter()
        .find(|(file, _)| !parsed.contains_key(file))
    {
        return Some(format!("'{name}' imports macros from missing template '{file}'"));
    }

    let mut seen = vec![name];
    let mut current = template;
    while let Some(parent) = &current.parent {
        if seen.contains(&parent.as_str()) {
            return Some(format!("'{name}' extends itself through '{parent}'"));
        }
        match parsed.get(parent) {
            Some((next, _)) => {
                seen.push(parent);
                current = next;
            }
            None => return Some(format!("'{name}' extends missing template '{parent}'")),
        }
    }
    None
}

/// Tera keeps the useful detail in the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(e) = source {
        parts.push(e.to_string());
        source = e.source();
    }
    parts.join(": ")
}
