//! REST API handlers for TODO list operations
//!
//! This module implements the HTTP endpoints the consuming agent drives:
//! listing, appending, and deleting entries for a given user. The handlers
//! only translate between the wire format and the store.

use super::{models::*, state::SharedState, store::StoreError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::debug;

/// Creates routes for TODO list operations
pub fn routes() -> Router<SharedState> {
    Router::new().route(
        "/todos/:username",
        get(get_todos).post(add_todo).delete(delete_todo),
    )
}

/// Endpoint: GET /todos/:username
/// Returns the user's entries in insertion order; unknown users get an
/// empty list rather than an error.
async fn get_todos(
    State(state): State<SharedState>,
    Path(username): Path<String>,
) -> Json<TodoListResponse> {
    Json(TodoListResponse {
        todos: state.todos.list(&username),
    })
}

/// Endpoint: POST /todos/:username
/// Appends the entry to the user's list, creating the list on first write.
async fn add_todo(
    State(state): State<SharedState>,
    Path(username): Path<String>,
    Json(payload): Json<AddTodoRequest>,
) -> Json<AddTodoResponse> {
    state.todos.append(&username, payload.todo.clone());
    debug!("appended todo for user {}", username);

    Json(AddTodoResponse {
        todo: payload.todo,
        user: username,
    })
}

/// Endpoint: DELETE /todos/:username
/// Removes the entry at the given 0-based index. An unknown user or an
/// out-of-range index maps to 404 without touching any list.
async fn delete_todo(
    State(state): State<SharedState>,
    Path(username): Path<String>,
    Json(payload): Json<DeleteTodoRequest>,
) -> Response {
    match state.todos.delete(&username, payload.todo_idx) {
        Ok(deleted) => Json(DeleteTodoResponse { deleted }).into_response(),
        Err(err @ StoreError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}
