// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Development server.
//!
//! ```text
//! GET /blog/post.html
//!   |  percent-decoded, invalid UTF-8 -> 404
//!   |  ""  -> index.html
//!   |  "..", absolute, prefix  -> 404
//!   v
//! src/blog/post.html --dispatch--> build/blog/post.html
//!   |
//!   +-- ok              200, type from the written file's extension
//!   +-- SourceNotFound  404 "404 Not found"
//!   +-- anything else   500, error chain as text/plain
//!
//! HEAD *  -> 200 text/html, no body
//! ```
//!
//! Requests build one at a time. Templates are reloaded for every request
//! so edits show up without a restart.


use std::net::SocketAddr;
use std::path::{Component, Path};
use std::sync::Arc;

use anyhow::Context as _;
use percent_encoding::percent_decode_str;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use warp::Filter;
use warp::http::header::{CONTENT_TYPE, HeaderValue};
use warp::http::StatusCode;
use warp::hyper::Body;
use warp::path::Tail;
use warp::reply::Response;

use crate::config::SiteConfig;
use crate::error::{BuildError, Result};
use crate::site::builders::{BuildEnv, BuilderRegistry};
use crate::site::render::TeraRenderer;
use crate::task::Registries;

/// Page served for `/`.
pub const INDEX: &str = "index.html";

const NOT_FOUND_BODY: &str = "404 Not found";

/// Content types by extension, matched case-insensitively.
const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("txt", "text/plain"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("pdf", "application/pdf"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("coffee", "text/x-coffeescript"),
    ("iced", "text/x-iced-coffeescript"),
    ("less", "text/css"),
];

/// Content type for a file name.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        })
        .map_or("application/octet-stream", |(_, mime)| mime)
}

/// Builds requested pages on demand.
#[derive(Debug, Clone)]
pub struct DevServer {
    state: Arc<State>,
}

#[derive(Debug)]
struct State {
    config: Arc<SiteConfig>,
    registries: Arc<Registries>,
    build_lock: Mutex<()>,
}

impl DevServer {
    #[must_use]
    pub fn new(config: Arc<SiteConfig>, registries: Arc<Registries>) -> Self {
        Self {
            state: Arc::new(State {
                config,
                registries,
                build_lock: Mutex::new(()),
            }),
        }
    }

    /// All routes of the server.
    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (Response,), Error = warp::Rejection> + Clone + Send + Sync + 'static
    {
        let state = Arc::clone(&self.state);
        let get = warp::get()
            .and(warp::path::tail())
            .and(warp::any().map(move || Arc::clone(&state)))
            .then(|tail: Tail, state: Arc<State>| async move { state.respond(tail.as_str()).await });
        let head = warp::head().map(|| response(StatusCode::OK, "text/html", Body::empty()));

        get.or(head).unify()
    }

    /// Serve on the configured address until `shutdown` is cancelled.
    ///
    /// # Errors
    ///
    /// Fails if the address cannot be resolved or bound.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<()> {
        let address = self.state.config.server.address();
        let addr: SocketAddr = tokio::net::lookup_host(&address)
            .await
            .with_context(|| format!("failed to resolve {address}"))?
            .next()
            .with_context(|| format!("{address} did not resolve to any address"))?;

        let signal = async move { shutdown.cancelled().await };
        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, signal)
            .with_context(|| format!("failed to listen on {addr}"))?;

        info!("listening on http://{bound}");
        server.await;
        info!("stopped listening on http://{bound}");
        Ok(())
    }
}

impl State {
    async fn respond(&self, tail: &str) -> Response {
        let decoded = match percent_decode_str(tail).decode_utf8() {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(path = tail, "invalid UTF-8 in request path: {e}");
                return not_found();
            }
        };
        let relative = if decoded.is_empty() { INDEX } else { &*decoded };
        if relative.contains('\0')
            || !Path::new(relative)
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
        {
            warn!(path = relative, "refusing path outside the source tree");
            return not_found();
        }

        let _guard = self.build_lock.lock().await;
        let config = &self.config;
        let src = config.src_directory.join(relative);
        let dest = config.build_directory.join(relative);

        match self.build(&src, &dest).await {
            Ok(Some((written, bytes))) => {
                info!(path = relative, dest = %written.display(), "served");
                response(StatusCode::OK, mime_for(&written), Body::from(bytes))
            }
            Ok(None) => {
                debug!(path = relative, "not found");
                not_found()
            }
            Err(e) => {
                let message = format!("{e:#}");
                warn!(path = relative, error = %message, "build failed");
                response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "text/plain",
                    Body::from(message),
                )
            }
        }
    }

    /// `Ok(None)` when there is nothing to build for the path.
    async fn build(
        &self,
        src: &Path,
        dest: &Path,
    ) -> Result<Option<(std::path::PathBuf, Vec<u8>)>> {
        let renderer = TeraRenderer::load(&self.config)?;
        let env = BuildEnv::new(&self.config, &renderer);
        let builders: &BuilderRegistry = self.registries.builders();

        let written = match builders.dispatch(&env, src, dest).await {
            Ok(written) => written,
            Err(e) if matches!(
                e.downcast_ref::<BuildError>(),
                Some(BuildError::SourceNotFound { .. })
            ) =>
            {
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let bytes = tokio::fs::read(&written)
            .await
            .with_context(|| format!("failed to read {}", written.display()))?;
        Ok(Some((written, bytes)))
    }
}

fn not_found() -> Response {
    response(StatusCode::NOT_FOUND, "text/plain", Body::from(NOT_FOUND_BODY))
}

fn response(status: StatusCode, content_type: &'static str, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
