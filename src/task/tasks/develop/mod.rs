// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `develop` task: serve pages built on request until Ctrl+C.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::{info, warn};

use crate::error::Result;
use crate::server::DevServer;
use crate::task::{TaskAction, TaskContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct DevelopTask;

impl TaskAction for DevelopTask {
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let shutdown = ctx.cancel_token().child_token();

            let interrupt = shutdown.clone();
            let listener = tokio::spawn(async move {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        if let Err(e) = result {
                            warn!("failed to listen for Ctrl+C: {e}");
                            return;
                        }
                        info!("interrupted, shutting down");
                        interrupt.cancel();
                    }
                    () = interrupt.cancelled() => {}
                }
            });

            let server = DevServer::new(Arc::clone(ctx.config()), Arc::clone(ctx.registries()));
            let result = server.serve(shutdown.clone()).await;

            shutdown.cancel();
            let _ = listener.await;
            result
        })
    }
}
