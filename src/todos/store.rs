//! In-memory TODO storage.
//!
//! The [`TodoStore`] is the single owner of all per-user list state. Every
//! read hands back a clone and every mutation goes through a store method,
//! so no handler ever holds a reference into the map.

use dashmap::DashMap;
use thiserror::Error;

/// Error raised when a delete targets a user or index that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no todo at index {idx} for user '{user}'")]
    NotFound { user: String, idx: usize },
}

/// Per-user ordered TODO lists, keyed by username.
///
/// DashMap serializes same-key mutations through its shard locks while
/// letting different users proceed concurrently, which is exactly the
/// isolation the handlers need. A list is created on first append and lives
/// for the rest of the process; there is no delete-user operation.
#[derive(Default)]
pub struct TodoStore {
    lists: DashMap<String, Vec<String>>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            lists: DashMap::new(),
        }
    }

    /// Appends `todo` to the end of `user`'s list, creating the list if this
    /// is the user's first entry. Always succeeds.
    pub fn append(&self, user: &str, todo: String) {
        self.lists.entry(user.to_string()).or_default().push(todo);
    }

    /// Returns `user`'s entries in insertion order.
    ///
    /// Unknown users get an empty vec rather than an error; reads never
    /// create a list.
    pub fn list(&self, user: &str) -> Vec<String> {
        self.lists
            .get(user)
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the entry at 0-based `idx` from `user`'s list,
    /// shifting later entries down by one.
    ///
    /// Fails with [`StoreError::NotFound`] when the user is unknown or the
    /// index is out of range; a failed delete leaves every list untouched.
    pub fn delete(&self, user: &str, idx: usize) -> Result<String, StoreError> {
        let mut entries = self.lists.get_mut(user).ok_or_else(|| StoreError::NotFound {
            user: user.to_string(),
            idx,
        })?;

        if idx >= entries.len() {
            return Err(StoreError::NotFound {
                user: user.to_string(),
                idx,
            });
        }

        Ok(entries.remove(idx))
    }
}
