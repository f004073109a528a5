//! Plugin Discovery Module
//!
//! This module serves the documents a consuming agent uses to discover the
//! service: the plugin manifest at its well-known path, the OpenAPI
//! description (with its server-URL placeholder filled in at serve time),
//! and the logo. It also hosts the liveness probe at `/`.

pub mod handlers;
pub mod helpers;

// Re-export commonly used items
pub use handlers::routes;

/// Manifest filename inside the assets directory
pub const MANIFEST_FILE: &str = "ai-plugin.json";
/// OpenAPI description filename inside the assets directory
pub const OPENAPI_FILE: &str = "openapi.yaml";
/// Logo filename inside the assets directory
pub const LOGO_FILE: &str = "logo.png";
/// Placeholder in the OpenAPI description replaced with the request's base URL
pub const HOSTNAME_PLACEHOLDER: &str = "PLUGIN_HOSTNAME";
