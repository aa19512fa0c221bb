//! Interactive Session Handler
//!
//! Drives one read-execute-print loop over an async reader and two async
//! writers (output and errors).
//!
//! ## Session Lifecycle
//!
//! ```text
//! 1. Banner written to the output
//!        │
//!        ▼
//! 2. ┌──────────────────────────────┐
//!    │      Main Loop               │
//!    │                              │
//!    │  ┌─────────────────────────┐ │
//!    │  │ Write prompt            │ │
//!    │  └───────────┬─────────────┘ │
//!    │              ▼               │
//!    │  ┌─────────────────────────┐ │
//!    │  │ Read one line           │ │
//!    │  └───────────┬─────────────┘ │
//!    │              ▼               │
//!    │  ┌─────────────────────────┐ │
//!    │  │ Execute command         │ │
//!    │  └───────────┬─────────────┘ │
//!    │              ▼               │
//!    │  ┌─────────────────────────┐ │
//!    │  │ Write result or error   │ │
//!    │  └───────────┬─────────────┘ │
//!    │              ▼               │
//!    │         [Loop back]          │
//!    └──────────────────────────────┘
//!        │
//!        ▼
//! 3. End of input: session returns its stats
//! ```
//!
//! ## Buffer Management
//!
//! Input is accumulated in a `BytesMut` buffer. A single read may carry part
//! of a line or several lines, so complete lines are split off the front of
//! the buffer as they become available.

use crate::commands::CommandHandler;
use crate::storage::Storage;
use bytes::{Bytes, BytesMut};
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::{debug, info, trace};

/// Maximum length of a single input line (64 KB)
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// Initial buffer capacity
const INITIAL_BUFFER_SIZE: usize = 4096;

/// Banner written once at session start
pub const DEFAULT_BANNER: &str = "Simple KV store started.";

/// Prompt written before each line is read
pub const DEFAULT_PROMPT: &str = "> ";

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Line written once before the first prompt (None = no banner)
    pub banner: Option<String>,

    /// Text written before each line is read (None = no prompt)
    pub prompt: Option<String>,

    /// Longest accepted line, in bytes, excluding the terminator
    pub max_line_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            banner: Some(DEFAULT_BANNER.to_string()),
            prompt: Some(DEFAULT_PROMPT.to_string()),
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl SessionConfig {
    /// A config with neither banner nor prompt, for scripted input.
    pub fn quiet() -> Self {
        Self {
            banner: None,
            prompt: None,
            ..Self::default()
        }
    }
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines read, blank ones included
    pub lines_read: u64,
    /// Commands that completed without error
    pub commands_succeeded: u64,
    /// Lines that produced an error
    pub commands_failed: u64,
}

/// Errors that end a session.
///
/// Command failures are not session errors: they are written to the error
/// sink and the loop continues.
#[derive(Debug, Error)]
pub enum SessionError {
    /// I/O error on the input or one of the sinks
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line exceeded the configured limit
    #[error("line too long: {len} bytes (max: {max})")]
    LineTooLong { len: usize, max: usize },
}

/// One interactive session.
pub struct Session<S, R, W, E> {
    /// The dispatcher
    handler: CommandHandler<S>,

    /// Input source
    reader: R,

    /// Success output
    out: BufWriter<W>,

    /// Error output
    err: E,

    /// Buffer for incoming data
    buffer: BytesMut,

    config: SessionConfig,

    stats: SessionStats,
}

impl<S, R, W, E> Session<S, R, W, E>
where
    S: Storage,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    /// Creates a session with the default config.
    pub fn new(handler: CommandHandler<S>, reader: R, out: W, err: E) -> Self {
        Self {
            handler,
            reader,
            out: BufWriter::new(out),
            err,
            buffer: BytesMut::with_capacity(INITIAL_BUFFER_SIZE),
            config: SessionConfig::default(),
            stats: SessionStats::default(),
        }
    }

    /// Replaces the session config.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the loop until the input is exhausted.
    pub async fn run(mut self) -> Result<SessionStats, SessionError> {
        info!("Session started");

        if let Some(banner) = self.config.banner.take() {
            self.out.write_all(banner.as_bytes()).await?;
            self.out.write_all(b"\n").await?;
        }

        let result = self.main_loop().await;
        self.out.flush().await?;

        match &result {
            Ok(()) => info!(
                lines = self.stats.lines_read,
                succeeded = self.stats.commands_succeeded,
                failed = self.stats.commands_failed,
                "Session ended"
            ),
            Err(e) => debug!(error = %e, "Session ended with error"),
        }

        result.map(|()| self.stats)
    }

    /// The main prompt-read-execute loop.
    async fn main_loop(&mut self) -> Result<(), SessionError> {
        loop {
            if let Some(prompt) = &self.config.prompt {
                self.out.write_all(prompt.as_bytes()).await?;
            }
            self.out.flush().await?;

            let line = match self.next_line().await? {
                Some(line) => line,
                None => return Ok(()),
            };
            self.stats.lines_read += 1;

            self.process_line(&line).await?;
        }
    }

    /// Returns the next line without its terminator, or None at end of input.
    ///
    /// A final line with no trailing newline is still returned.
    async fn next_line(&mut self) -> Result<Option<Bytes>, SessionError> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let len = content_len(&self.buffer[..pos]);
                if len > self.config.max_line_len {
                    return Err(SessionError::LineTooLong {
                        len,
                        max: self.config.max_line_len,
                    });
                }

                let mut line = self.buffer.split_to(pos + 1);
                line.truncate(len);
                trace!(bytes = line.len(), remaining = self.buffer.len(), "Split line");
                return Ok(Some(line.freeze()));
            }

            // A trailing '\r' may still be followed by its '\n'
            let len = content_len(&self.buffer);
            if len > self.config.max_line_len {
                return Err(SessionError::LineTooLong {
                    len,
                    max: self.config.max_line_len,
                });
            }

            self.buffer.reserve(INITIAL_BUFFER_SIZE);

            let n = self.reader.read_buf(&mut self.buffer).await?;
            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(self.buffer.split().freeze()));
            }

            trace!(bytes = n, "Read data");
        }
    }

    /// Executes one line and writes its result or error.
    async fn process_line(&mut self, line: &[u8]) -> Result<(), SessionError> {
        let text = match std::str::from_utf8(line) {
            Ok(text) => text.trim(),
            Err(e) => {
                self.stats.commands_failed += 1;
                return self.report_error(&format!("invalid UTF-8: {}", e)).await;
            }
        };

        if text.is_empty() {
            return Ok(());
        }

        let mut output = Vec::new();
        match self.handler.execute(text, &mut output) {
            Ok(()) => {
                self.stats.commands_succeeded += 1;
                self.out.write_all(&output).await?;
            }
            Err(e) => {
                self.stats.commands_failed += 1;
                debug!(kind = %e.kind(), error = %e, "Command failed");
                self.report_error(&e.to_string()).await?;
            }
        }

        Ok(())
    }

    /// Writes `Error: <message>` to the error sink.
    async fn report_error(&mut self, message: &str) -> Result<(), SessionError> {
        // Keep results and errors in order on a shared terminal
        self.out.flush().await?;

        let rendered = format!("Error: {}\n", message);
        self.err.write_all(rendered.as_bytes()).await?;
        self.err.flush().await?;
        Ok(())
    }
}

/// Length of a line without its optional trailing `\r`.
#[inline]
fn content_len(line: &[u8]) -> usize {
    match line.last() {
        Some(b'\r') => line.len() - 1,
        _ => line.len(),
    }
}

/// Runs a session with the given config to completion.
///
/// This is a convenience function that creates a [`Session`] and runs it.
pub async fn run_session<S, R, W, E>(
    handler: CommandHandler<S>,
    reader: R,
    out: W,
    err: E,
    config: SessionConfig,
) -> Result<SessionStats, SessionError>
where
    S: Storage,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    Session::new(handler, reader, out, err)
        .with_config(config)
        .run()
        .await
}
