//! Application State Management
//!
//! This module manages the shared application state: the TODO store plus the
//! location of the static plugin assets (manifest, OpenAPI description,
//! logo).

use super::store::TodoStore;
use axum::http::StatusCode;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the TODO store and asset information
pub struct AppState {
    /// In-memory storage for TODO lists, keyed by username.
    pub todos: TodoStore,

    /// Path to the directory containing the plugin's static assets.
    pub assets_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppState {
    /// Creates a new AppState with an empty store.
    ///
    /// When `assets_dir` is `None` the assets directory is located with the
    /// usual lookup strategy relative to the working directory.
    pub fn new(assets_dir: Option<PathBuf>) -> Self {
        let assets_dir = assets_dir.unwrap_or_else(|| {
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Self::locate_assets_directory(&current_dir)
        });

        info!("using assets directory: {:?}", assets_dir);

        Self {
            todos: TodoStore::new(),
            assets_dir,
        }
    }

    /// Attempts to locate the assets directory using a multi-step strategy
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        // Strategy to locate assets:
        // 1. ./assets
        // 2. ../assets (if running from a subdir)
        // 3. Fallback to "assets" relative path

        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets") // Fallback
    }

    /// Reads a text asset (manifest or OpenAPI description) from the assets
    /// directory.
    pub async fn load_text_asset(&self, name: &str) -> Result<String, StatusCode> {
        tokio::fs::read_to_string(self.assets_dir.join(name))
            .await
            .map_err(|_| StatusCode::NOT_FOUND)
    }

    /// Reads a binary asset (the logo) from the assets directory.
    pub async fn load_binary_asset(&self, name: &str) -> Result<Vec<u8>, StatusCode> {
        tokio::fs::read(self.assets_dir.join(name))
            .await
            .map_err(|_| StatusCode::NOT_FOUND)
    }
}
