//! Persisted session storage.
//!
//! ARCHITECTURE
//! ============
//! The dashboard keeps its session in browser session-scoped storage so a
//! reload within the same tab restores it, while closing the browser does
//! not. The store only sees this trait; the web binding (a thin wrapper over
//! `web_sys::Storage`) lives with the UI crate, and tests and native callers
//! use [`MemoryStorage`].
//!
//! The three keys are conceptually one unit: a `token` entry may exist
//! without `userRole`/`userEmail` (resolution pending), but role or email
//! without a token is invalid and gets cleared on startup.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the resolved role (`"admin"` or `"guest"`).
pub const ROLE_KEY: &str = "userRole";
/// Key holding the resolved account email.
pub const EMAIL_KEY: &str = "userEmail";

/// String key/value storage scoped to the current browser session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Remove every entry, not just the session keys.
    fn clear(&self);
}

/// In-memory [`SessionStorage`] for tests and native use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
