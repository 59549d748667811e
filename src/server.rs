use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{DefaultBodyLimit, State},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::decoder::CompactJwtDecoder;
use crate::ui::{fragments, page};

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState {
        decoder: Arc::new(CompactJwtDecoder),
        config: Arc::clone(&config),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router. Separate from [`start_server`] so tests
/// can drive it without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(index_handler))
        // Fragment endpoints driven by htmx
        .route("/fragments/decode", post(decode_fragment))
        .route("/fragments/clear", post(clear_fragment))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - the inspector page.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(page::inspector_page(&state.config))
}

/// Form body of a decode request.
#[derive(Debug, Deserialize)]
struct DecodeForm {
    /// Raw token text, exactly as typed or pasted.
    #[serde(default)]
    token: String,
}

/// POST /fragments/decode - decode the submitted token and return the full
/// display snapshot. Token problems are data here, never an HTTP error.
async fn decode_fragment(
    State(state): State<AppState>,
    Form(form): Form<DecodeForm>,
) -> impl IntoResponse {
    let result = state.decoder.decode(&form.token);

    match &result {
        Ok(decoded) => debug!(
            name: "token.decoded",
            header_claims = decoded.header.len(),
            payload_claims = decoded.payload.len(),
            "Token decoded"
        ),
        Err(err) => debug!(
            name: "token.decode_failed",
            reason = %err,
            input_length = form.token.len(),
            "Token rejected"
        ),
    }

    Html(fragments::decode_response(&form.token, &result))
}

/// POST /fragments/clear - reset status, overlay and panels.
async fn clear_fragment() -> impl IntoResponse {
    debug!(name: "editor.cleared", "Editor cleared");
    Html(fragments::clear_response())
}
