//! In-Memory Storage Engine
//!
//! This module implements the key-value store behind linekv.
//!
//! ## Design Decisions
//!
//! 1. **Single owner**: the engine is a plain value owned by whoever composes
//!    the system. There is no global instance, so tests can build as many
//!    independent stores as they like.
//! 2. **Narrow capability**: callers depend on the [`Storage`] trait
//!    (`set`/`get`/`delete`), not on `StorageEngine` itself.
//! 3. **Miss asymmetry**: a `get` miss is an error, a `delete` miss is only
//!    logged. Both emit one `info` event carrying the missing key.
//!
//! ## Concurrency Model
//!
//! Strictly single-threaded: every operation takes `&mut self`. Sharing one
//! engine between clients would need a lock around it (one writer at a time,
//! readers excluded during writes).

use crate::error::ErrorKind;
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// Errors returned by storage operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Lookup miss
    #[error("key not found")]
    KeyNotFound,
}

impl StorageError {
    /// Returns the stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::KeyNotFound => ErrorKind::KeyNotFound,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The storage capability the dispatcher depends on.
pub trait Storage {
    /// Inserts or overwrites the entry for `key`.
    fn set(&mut self, key: String, value: String) -> StorageResult<()>;

    /// Returns the value stored under `key`, or [`StorageError::KeyNotFound`].
    fn get(&mut self, key: &str) -> StorageResult<String>;

    /// Removes the entry for `key` if present.
    fn delete(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn set(&mut self, key: String, value: String) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: &str) -> StorageResult<String> {
        (**self).get(key)
    }

    fn delete(&mut self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn set(&mut self, key: String, value: String) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: &str) -> StorageResult<String> {
        (**self).get(key)
    }

    fn delete(&mut self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}

/// Operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStats {
    /// Current number of keys
    pub keys: usize,
    /// Total SET operations
    pub sets: u64,
    /// Total GET operations
    pub gets: u64,
    /// Total DEL operations
    pub deletes: u64,
    /// GET and DEL operations that found no entry
    pub misses: u64,
}

/// The main storage engine for linekv.
///
/// # Example
///
/// ```
/// use linekv::storage::{Storage, StorageEngine, StorageError};
///
/// let mut engine = StorageEngine::new();
///
/// engine.set("name".to_string(), "Ariz".to_string()).unwrap();
/// assert_eq!(engine.get("name"), Ok("Ariz".to_string()));
///
/// engine.delete("name").unwrap();
/// assert_eq!(engine.get("name"), Err(StorageError::KeyNotFound));
/// ```
#[derive(Debug, Default)]
pub struct StorageEngine {
    data: HashMap<String, String>,
    stats: StorageStats,
}

impl StorageEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty engine with room for at least `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashMap::with_capacity(capacity),
            stats: StorageStats::default(),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks for a key without touching the counters or logging.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns a snapshot of the operation counters.
    pub fn stats(&self) -> StorageStats {
        StorageStats {
            keys: self.data.len(),
            ..self.stats
        }
    }
}

impl Storage for StorageEngine {
    fn set(&mut self, key: String, value: String) -> StorageResult<()> {
        self.stats.sets += 1;
        self.data.insert(key, value);
        Ok(())
    }

    fn get(&mut self, key: &str) -> StorageResult<String> {
        self.stats.gets += 1;

        match self.data.get(key) {
            Some(value) => Ok(value.clone()),
            None => {
                self.stats.misses += 1;
                info!(key = %key, "Get: entry not found");
                Err(StorageError::KeyNotFound)
            }
        }
    }

    fn delete(&mut self, key: &str) -> StorageResult<()> {
        self.stats.deletes += 1;

        if self.data.remove(key).is_none() {
            self.stats.misses += 1;
            info!(key = %key, "Delete: entry not found");
        }

        Ok(())
    }
}
