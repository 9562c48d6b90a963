//! Server identity endpoint.
//!
//! `/info` serializes the [`ServerInfo`] snapshot taken at startup. Unlike
//! the other JSON routes it serializes by hand: the content type is set up
//! front and a serialization failure degrades the body to the literal
//! `error` while the status stays 200.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::ServerInfo;

/// Body sent when the response value cannot be serialized.
pub const FALLBACK_BODY: &str = "error";

// ---

pub fn router() -> Router<Arc<ServerInfo>> {
    // ---
    Router::new().route("/info", get(handler))
}

async fn handler(State(info): State<Arc<ServerInfo>>) -> Response {
    // ---
    debug!("GET /info - host {}", info.hostname);
    render_json(info.as_ref())
}

/// Serialize `value` as a JSON body, falling back to [`FALLBACK_BODY`].
fn render_json<T: Serialize>(value: &T) -> Response {
    // ---
    let body = match serde_json::to_string(value) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to serialize /info response: {}", e);
            FALLBACK_BODY.to_string()
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
