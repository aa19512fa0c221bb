//! Interactive Session Module
//!
//! This module runs the line-at-a-time loop around the dispatcher: read a
//! line, execute it, print the result or the error, repeat until the input
//! ends.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐      ┌─────────────────────────────────────────────┐
//! │  input       │─────>│                 Session                     │
//! │ (AsyncRead)  │      │                                             │
//! └──────────────┘      │  ┌───────────┐   ┌────────────┐             │
//!                       │  │ Read line │──>│ Execute    │──┐          │
//!                       │  └───────────┘   └────────────┘  │          │
//!                       └──────────────────────────────────┼──────────┘
//!                                                          │
//!                                ┌─────────────────────────┴──┐
//!                                ▼                            ▼
//!                         output (GET values)         errors ("Error: ...")
//! ```
//!
//! ## Features
//!
//! - **Buffer Management**: `BytesMut` buffer handles partial and batched reads
//! - **Crash-free**: command errors are printed and the loop continues
//! - **Statistics**: tracks lines read and command outcomes
//!
//! ## Example
//!
//! ```ignore
//! use linekv::commands::CommandHandler;
//! use linekv::session::{run_session, SessionConfig};
//! use linekv::storage::StorageEngine;
//!
//! let mut engine = StorageEngine::new();
//! let handler = CommandHandler::new(&mut engine);
//!
//! let stats = run_session(
//!     handler,
//!     tokio::io::stdin(),
//!     tokio::io::stdout(),
//!     tokio::io::stderr(),
//!     SessionConfig::default(),
//! )
//! .await?;
//! ```

pub mod handler;

// Re-export commonly used types
pub use handler::{
    run_session, Session, SessionConfig, SessionError, SessionStats, DEFAULT_BANNER,
    DEFAULT_MAX_LINE_LEN, DEFAULT_PROMPT,
};
