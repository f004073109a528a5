//! TODO Domain Models
//!
//! Request and response bodies for the REST endpoints the agent calls.

use serde::{Deserialize, Serialize};

/// Body of `POST /todos/:username`.
#[derive(Debug, Deserialize)]
pub struct AddTodoRequest {
    /// The entry text to append.
    pub todo: String,
}

/// Response echoing a freshly added entry.
#[derive(Debug, Serialize)]
pub struct AddTodoResponse {
    /// The entry that was appended.
    pub todo: String,

    /// The owner of the list it went into.
    pub user: String,
}

/// Response for `GET /todos/:username`.
#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    /// The user's entries in insertion order.
    pub todos: Vec<String>,
}

/// Body of `DELETE /todos/:username`.
#[derive(Debug, Deserialize)]
pub struct DeleteTodoRequest {
    /// 0-based position of the entry to remove.
    pub todo_idx: usize,
}

/// Response confirming a deletion.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    /// The entry that was removed.
    pub deleted: String,
}
