//! Plugin discovery route handlers
//!
//! These endpoints carry no business logic: the manifest is served verbatim,
//! the OpenAPI description gets a single string substitution, and the logo
//! is raw bytes. The store never appears here.

use super::{helpers::*, LOGO_FILE, MANIFEST_FILE, OPENAPI_FILE};
use crate::todos::state::SharedState;
use axum::{
    extract::{Host, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Creates routes for plugin discovery and the liveness probe
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(hello_world))
        .route("/.well-known/ai-plugin.json", get(plugin_manifest))
        .route("/openapi.yaml", get(openapi_description))
        .route("/logo.png", get(plugin_logo))
}

/// Endpoint: GET /
/// Liveness probe.
async fn hello_world() -> impl IntoResponse {
    Json(json!({ "Hello": "world" }))
}

/// Endpoint: GET /.well-known/ai-plugin.json
/// Serves the manifest file as-is.
async fn plugin_manifest(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, StatusCode> {
    let manifest = state.load_text_asset(MANIFEST_FILE).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], manifest))
}

/// Endpoint: GET /openapi.yaml
/// Serves the OpenAPI description with its server-URL placeholder replaced
/// by the scheme and host the request actually arrived on.
async fn openapi_description(
    State(state): State<SharedState>,
    Host(host): Host,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    let text = state.load_text_asset(OPENAPI_FILE).await?;
    let base_url = request_base_url(&headers, &host);

    Ok((
        [(header::CONTENT_TYPE, "text/yaml")],
        substitute_hostname(&text, &base_url),
    ))
}

/// Endpoint: GET /logo.png
async fn plugin_logo(State(state): State<SharedState>) -> Result<impl IntoResponse, StatusCode> {
    let bytes = state.load_binary_asset(LOGO_FILE).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}
