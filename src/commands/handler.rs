//! Command Handler Module
//!
//! Routes one input line to the matching storage operation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CommandHandler                          │
//! │                                                             │
//! │  ┌──────────────┐    ┌─────────────┐    ┌─────────────┐     │
//! │  │ parse_line() │───>│  dispatch() │───>│   Storage   │     │
//! │  └──────────────┘    └─────────────┘    └─────────────┘     │
//! │                             │                               │
//! │                             ▼                               │
//! │                       output sink (GET)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is wrapped with operation context and returned; nothing is
//! retried and nothing here panics on malformed input.

use crate::error::{self, ErrorKind};
use crate::protocol::{parse_line, Command, ParseError};
use crate::storage::{Storage, StorageError};
use std::io::{self, Write};
use thiserror::Error;
use tracing::trace;

/// Errors produced while executing one command line.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The line did not parse
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// SET failed in storage
    #[error("set error: {0}")]
    Set(#[source] StorageError),

    /// GET failed in storage
    #[error("get {key:?}: {source}")]
    Get {
        key: String,
        #[source]
        source: StorageError,
    },

    /// DEL failed in storage
    #[error("delete error: {0}")]
    Delete(#[source] StorageError),

    /// Writing the GET result to the output sink failed
    #[error("write output: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    /// Returns the kind of the underlying cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Parse(e) => e.kind(),
            CommandError::Set(e)
            | CommandError::Get { source: e, .. }
            | CommandError::Delete(e) => e.kind(),
            CommandError::Output(_) => ErrorKind::Io,
        }
    }

    /// Returns true if the command failed because a key was missing.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::KeyNotFound
    }
}

/// Dispatches parsed commands to a [`Storage`] implementation.
///
/// The handler owns its storage capability. Pass `&mut engine` to keep
/// ownership of the engine with the caller.
///
/// # Example
///
/// ```
/// use linekv::commands::CommandHandler;
/// use linekv::storage::StorageEngine;
///
/// let mut engine = StorageEngine::new();
/// let mut handler = CommandHandler::new(&mut engine);
/// let mut out = Vec::new();
///
/// handler.execute("SET name Ariz", &mut out).unwrap();
/// handler.execute("GET name", &mut out).unwrap();
/// assert_eq!(out, b"Ariz\n");
/// ```
#[derive(Debug)]
pub struct CommandHandler<S> {
    storage: S,
}

impl<S: Storage> CommandHandler<S> {
    /// Creates a new command handler over the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consumes the handler, returning the storage.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Parses and executes one line.
    ///
    /// A successful GET writes the value and a newline to `out`; no other
    /// command writes anything.
    pub fn execute<W: Write + ?Sized>(
        &mut self,
        input: &str,
        out: &mut W,
    ) -> error::Result<()> {
        let command = parse_line(input)?;
        trace!(command = %command, "Parsed command");
        self.dispatch(command, out)
    }

    /// Executes an already validated command.
    pub fn dispatch<W: Write + ?Sized>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> error::Result<()> {
        match command {
            Command::Set { key, value } => {
                self.storage.set(key, value).map_err(CommandError::Set)?;
            }
            Command::Get { key } => {
                let value = match self.storage.get(&key) {
                    Ok(value) => value,
                    Err(source) => return Err(CommandError::Get { key, source }),
                };
                writeln!(out, "{}", value)?;
            }
            Command::Del { key } => {
                self.storage.delete(&key).map_err(CommandError::Delete)?;
            }
        }

        Ok(())
    }
}
