//! Routing module for the TODO plugin service

use crate::todos::state::SharedState;
use axum::{body::Body, extract::Request, http::HeaderValue, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState, agent_origin: &str) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        debug!("REQ: {} {}", method, uri);
        let res = next.run(req).await;
        if !res.status().is_success() {
            warn!("RES: {} for {} {}", res.status(), method, uri);
        }
        res
    });

    // Middleware: CORS, restricted to the consuming agent's origin. A bad
    // origin value falls back to permissive so local dev keeps working.
    let cors_layer = match agent_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!("invalid agent origin {:?}, allowing any origin", agent_origin);
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    // Routes
    Router::new()
        .merge(crate::plugin::routes())
        .merge(crate::todos::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
