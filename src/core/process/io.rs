// stationary: Simple static site generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (read_to_end, bytes kept intact)
//!   wait
//!   join readers
//!   --> ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! Compiled assets are written exactly as the tool printed them, so streams
//! are read as raw bytes rather than line by line.

use crate::error::Result;
use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// Spawns a reader task for one stream.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<Vec<u8>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move { read_stream(stream, flags, &name, stream_name).await })
    })
}

/// Waits for a reader task, yielding whatever it collected.
async fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => Vec::new(),
    }
}

impl ProcessBuilder {
    /// Runs the child process, capturing its streams and waiting for completion.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_config(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_config(), name, "stderr");

        let exit_status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for process {name} to exit"))?;

        let stdout = join_reader(stdout_handle).await;
        let stderr = join_reader(stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
        ))
    }
}

/// Reads a stream to its end, logging lines and keeping the bytes as asked.
async fn read_stream<R>(
    mut reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
) -> Vec<u8>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    if let Err(e) = reader.read_to_end(&mut buffer).await {
        warn!(
            process = %process_name,
            stream = %stream_name,
            error = %e,
            "error reading stream"
        );
    }

    if flags.contains(StreamFlags::FORWARD_TO_LOG) {
        for line in String::from_utf8_lossy(&buffer).lines() {
            trace!(process = %process_name, stream = %stream_name, line = %line, "output");
        }
    }

    if flags.contains(StreamFlags::KEEP) {
        buffer
    } else {
        Vec::new()
    }
}
