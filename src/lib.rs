//! # linekv - An In-Memory Key-Value Store with a Line Protocol
//!
//! linekv keeps string keys and values in memory and is driven by a
//! line-oriented text protocol: `SET key value`, `GET key`, `DEL key`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              linekv                                     │
//! │                                                                         │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐                  │
//! │  │  Session    │───>│  Command    │───>│  Storage    │                  │
//! │  │  (stdin)    │    │  Handler    │    │  Engine     │                  │
//! │  └─────────────┘    └──────┬──────┘    └─────────────┘                  │
//! │                            │                                            │
//! │                            ▼                                            │
//! │                     ┌─────────────┐                                     │
//! │                     │ Line Parser │                                     │
//! │                     └─────────────┘                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use linekv::commands::CommandHandler;
//! use linekv::storage::StorageEngine;
//!
//! let mut engine = StorageEngine::new();
//! let mut handler = CommandHandler::new(&mut engine);
//! let mut out = Vec::new();
//!
//! handler.execute("SET KEY1 VALUE_2", &mut out).unwrap();
//! handler.execute("GET KEY1", &mut out).unwrap();
//! assert_eq!(out, b"VALUE_2\n");
//!
//! handler.execute("DEL KEY1", &mut out).unwrap();
//! let err = handler.execute("GET KEY1", &mut out).unwrap_err();
//! assert!(err.is_not_found());
//! ```
//!
//! ## Supported Commands
//!
//! - `SET key value`
//! - `GET key`
//! - `DEL key`
//!
//! Command names are case-sensitive. Arguments may contain ASCII letters,
//! digits, `_`, `/` and `*`.
//!
//! ## Module Overview
//!
//! - [`protocol`]: command types and the line parser
//! - [`storage`]: the storage capability and the in-memory engine
//! - [`commands`]: the dispatcher from parsed commands to storage
//! - [`session`]: the interactive read-execute-print loop
//! - [`error`]: stable error kinds shared by every error type

pub mod commands;
pub mod error;
pub mod protocol;
pub mod session;
pub mod storage;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use commands::{CommandError, CommandHandler};
pub use error::ErrorKind;
pub use protocol::{parse_line, Command, CommandName, ParseError};
pub use session::{run_session, Session, SessionConfig, SessionError, SessionStats};
pub use storage::{Storage, StorageEngine, StorageError, StorageStats};

/// Version of linekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
