//! Storage Engine Module
//!
//! This module provides the key-value store for linekv and the narrow
//! [`Storage`] capability the dispatcher is written against.
//!
//! ## Features
//!
//! - **Owned, not global**: construct as many independent engines as needed
//! - **Point operations**: `set` (upsert), `get`, `delete`
//! - **Diagnostics**: lookup and removal misses emit an `info` event with the key
//! - **Counters**: [`StorageStats`] snapshot of operations performed
//!
//! ## Example
//!
//! ```
//! use linekv::storage::{Storage, StorageEngine};
//!
//! let mut engine = StorageEngine::new();
//! engine.set("session".to_string(), "token123".to_string()).unwrap();
//! assert_eq!(engine.get("session").unwrap(), "token123");
//!
//! // Removing a missing key is logged, not reported
//! assert!(engine.delete("nobody").is_ok());
//! ```

pub mod engine;

// Re-export commonly used types
pub use engine::{Storage, StorageEngine, StorageError, StorageResult, StorageStats};
