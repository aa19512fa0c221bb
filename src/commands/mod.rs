//! Command Handler Module
//!
//! This module is the dispatcher of linekv. It takes a raw input line,
//! runs it through the protocol parser and routes the resulting command
//! to the storage engine.
//!
//! ## Architecture
//!
//! ```text
//! Input line
//!       │
//!       ▼
//! ┌─────────────────┐
//! │  Line Parser    │  (protocol module)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CommandHandler  │  (this module)
//! │                 │
//! │  - Dispatch     │
//! │  - Wrap errors  │
//! │  - Write output │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Storage      │  (storage module)
//! └─────────────────┘
//! ```
//!
//! ## Supported Commands
//!
//! - `SET key value` - Insert or overwrite a key
//! - `GET key` - Print a key's value
//! - `DEL key` - Remove a key (removing a missing key is not an error)

pub mod handler;

// Re-export the main command handler
pub use handler::{CommandError, CommandHandler};
