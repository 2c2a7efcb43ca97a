//! Durable key/value storage for session entries.
//!
//! The platform's web client keeps its session in `localStorage` under two
//! fixed keys. This module abstracts that as the `SessionStore` trait so the
//! session manager can run against a file-backed store, the OS keychain, or
//! an in-memory map in tests.

mod file;
mod keychain;
mod memory;

pub use file::FileStore;
pub use keychain::KeyringStore;
pub use memory::MemoryStore;

use anyhow::Result;

/// Storage key for the bearer token entry.
pub const TOKEN_KEY: &str = "authToken";

/// Storage key for the JSON-serialized user profile entry.
pub const USER_KEY: &str = "user";

/// A durable string key/value store holding the session entries.
///
/// Operations are atomic per key only. The token and user entries are not
/// transactionally linked; callers must not assume they stay in lockstep.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the entry under `key`. Removing a missing entry is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
