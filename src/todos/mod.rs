//! TODO List Domain Module
//!
//! This module contains all TODO list business logic, including:
//! - Domain models (request/response bodies)
//! - The in-memory multi-tenant store
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
pub use store::{StoreError, TodoStore};
