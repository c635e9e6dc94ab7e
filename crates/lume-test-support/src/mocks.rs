//! Fake storage backends and session issuers.

use std::cell::RefCell;

use lume_identity::error::{SessionError, StorageError};
use lume_identity::session::{Session, SessionIssuer};
use lume_identity::storage::{KeyValueStore, MemoryStore};

/// One call observed by [`RecordingStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageOp {
    /// `get(key)`.
    Get(String),
    /// `set(key, _)`; the value is not recorded.
    Set(String),
    /// `remove(key)`.
    Remove(String),
}

/// In-memory store that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    ops: RefCell<Vec<StorageOp>>,
}

impl RecordingStore {
    /// Empty store with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key = value`.
    #[must_use]
    pub fn seeded(key: &str, value: &str) -> Self {
        Self {
            inner: [(key, value)].into_iter().collect(),
            ops: RefCell::default(),
        }
    }

    /// Calls observed so far.
    #[must_use]
    pub fn ops(&self) -> Vec<StorageOp> {
        self.ops.borrow().clone()
    }

    /// Current contents.
    #[must_use]
    pub const fn contents(&self) -> &MemoryStore {
        &self.inner
    }
}

impl KeyValueStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ops.borrow_mut().push(StorageOp::Get(key.to_string()));
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ops.get_mut().push(StorageOp::Set(key.to_string()));
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.ops.get_mut().push(StorageOp::Remove(key.to_string()));
        self.inner.remove(key)
    }
}

/// Store whose reads and/or writes fail with [`StorageError::Backend`].
#[derive(Clone, Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: bool,
    fail_writes: bool,
}

impl FailingStore {
    /// Every read fails; writes succeed.
    #[must_use]
    pub fn reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Every write and removal fails; reads succeed.
    #[must_use]
    pub fn writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Seed `key = value` before failures kick in.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.inner = [(key, value)].into_iter().collect();
        self
    }

    fn failure(operation: &'static str, key: &str) -> StorageError {
        StorageError::Backend {
            operation,
            key: key.to_string(),
            detail: "injected failure".to_string(),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(Self::failure("get", key));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::failure("set", key));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::failure("remove", key));
        }
        self.inner.remove(key)
    }
}

/// Issuer that rejects every secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectingIssuer {
    reason: &'static str,
}

impl RejectingIssuer {
    /// Reject with `reason`.
    #[must_use]
    pub const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

impl Default for RejectingIssuer {
    fn default() -> Self {
        Self::new("unknown account key")
    }
}

impl SessionIssuer for RejectingIssuer {
    fn issue(&self, _secret: &str) -> Result<Session, SessionError> {
        Err(SessionError::Rejected {
            reason: self.reason,
        })
    }
}
