//! TODO Plugin Library
//!
//! This library provides the core functionality for a per-user TODO list
//! service consumed by a natural-language agent. The agent discovers the
//! service through a plugin manifest and an OpenAPI description, then drives
//! the list store over plain REST calls.

// Domain modules
pub mod plugin;
pub mod todos;

// Infrastructure
pub mod config;
pub mod router;
