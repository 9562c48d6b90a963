//! Landing page reporting which host served the request.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use tracing::debug;

use crate::ServerInfo;

// ---

pub fn router() -> Router<Arc<ServerInfo>> {
    // ---
    Router::new().route("/", get(handler))
}

/// Handle `GET /`.
///
/// Only the exact root path lands here; every other unmatched path goes to
/// the gateway's not-found fallback.
async fn handler(State(info): State<Arc<ServerInfo>>) -> Html<String> {
    // ---
    debug!("GET / - host {}", info.hostname);
    Html(format!(
        "<h1>This request was processed by host: {}</h1>\n",
        info.hostname
    ))
}
